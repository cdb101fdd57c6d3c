//! Image coordinate previews.
//!
//! Seismic image volumes carry `inline`, `crossline`, and `depth`
//! coordinate arrays alongside the `image` variable. The preview prints
//! every 100th element of each so a human can eyeball that the
//! coordinates survived a round trip through another writer.

use std::borrow::Cow;
use std::sync::Arc;

use zarrs::array::data_type::{
    Float32DataType, Float64DataType, Int8DataType, Int16DataType, Int32DataType, Int64DataType,
    UInt8DataType, UInt16DataType, UInt32DataType, UInt64DataType,
};
use zarrs::array::{Array, ElementOwned};
use zarrs::filesystem::FilesystemStore;
use zarrs::storage::{ReadableStorageTraits, StoreKey};

use crate::{Error, Result};

/// Coordinate arrays expected alongside the image variable.
pub const IMAGE_COORDS: [&str; 3] = ["inline", "crossline", "depth"];

/// Name of the image variable's array.
pub const IMAGE_ARRAY: &str = "image";

/// Preview stride.
pub const DECIMATION_STEP: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordPreview {
    /// Formatted decimated values (elements 0, 100, 200, ...).
    Values(Vec<String>),
    /// The coordinate array is absent from the store.
    Missing,
    /// The coordinate array exists but holds a non-numeric data type.
    Unsupported(String),
}

/// Decimate the coordinate array `name` at the store root.
pub fn preview_coord(store: &Arc<FilesystemStore>, name: &str) -> Result<CoordPreview> {
    if !array_exists(store, name)? {
        return Ok(CoordPreview::Missing);
    }
    let array = Array::open(store.clone(), &format!("/{name}"))?;
    let data_type = array.data_type();
    let values = if data_type.is::<Int8DataType>() {
        decimated::<i8>(&array)?
    } else if data_type.is::<Int16DataType>() {
        decimated::<i16>(&array)?
    } else if data_type.is::<Int32DataType>() {
        decimated::<i32>(&array)?
    } else if data_type.is::<Int64DataType>() {
        decimated::<i64>(&array)?
    } else if data_type.is::<UInt8DataType>() {
        decimated::<u8>(&array)?
    } else if data_type.is::<UInt16DataType>() {
        decimated::<u16>(&array)?
    } else if data_type.is::<UInt32DataType>() {
        decimated::<u32>(&array)?
    } else if data_type.is::<UInt64DataType>() {
        decimated::<u64>(&array)?
    } else if data_type.is::<Float32DataType>() {
        decimated::<f32>(&array)?
    } else if data_type.is::<Float64DataType>() {
        decimated::<f64>(&array)?
    } else {
        let name = data_type
            .name_v3()
            .map_or_else(|| format!("{data_type:?}"), Cow::into_owned);
        return Ok(CoordPreview::Unsupported(name));
    };
    Ok(CoordPreview::Values(values))
}

fn array_exists(store: &Arc<FilesystemStore>, name: &str) -> Result<bool> {
    // Explicit metadata only, V3 then V2.
    for metadata in ["zarr.json", ".zarray"] {
        let key = StoreKey::new(format!("{name}/{metadata}")).map_err(Error::wrap)?;
        if store.get(&key)?.is_some() {
            return Ok(true);
        }
    }
    Ok(false)
}

fn decimated<T: ElementOwned + ToString>(array: &Array<FilesystemStore>) -> Result<Vec<String>> {
    let elements: Vec<T> = array.retrieve_array_subset(&array.subset_all())?;
    Ok(elements
        .iter()
        .step_by(DECIMATION_STEP)
        .map(T::to_string)
        .collect())
}

/// Print the decimated preview of every image coordinate.
pub fn print_image_coordinates(store: &Arc<FilesystemStore>) -> Result<()> {
    for name in IMAGE_COORDS {
        match preview_coord(store, name)? {
            CoordPreview::Values(values) => {
                println!("{name} decimated coords: [{}]\n", values.join(", "));
            }
            CoordPreview::Missing => {
                println!("{name} coordinate not found in the dataset.");
            }
            CoordPreview::Unsupported(data_type) => {
                println!("{name} coordinate has unsupported data type {data_type}.");
            }
        }
    }
    Ok(())
}

/// Overwrite every element of the image array with `value`.
pub fn reset_image(store: &Arc<FilesystemStore>, value: f32) -> Result<()> {
    let array = Array::open(store.clone(), &format!("/{IMAGE_ARRAY}"))?;
    if !array.data_type().is::<Float32DataType>() {
        return Err(Error::general(format!(
            "image array is not float32: {:?}",
            array.data_type()
        )));
    }
    let subset = array.subset_all();
    let count = usize::try_from(subset.num_elements()).map_err(Error::wrap)?;
    array.store_array_subset(&subset, vec![value; count])?;
    log::info!("reset {count} image elements to {value}");
    Ok(())
}
