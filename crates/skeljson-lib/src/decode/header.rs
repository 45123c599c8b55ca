use tracing::{info, warn};

use crate::cursor::ByteCursor;
use crate::error::Result;
use crate::model::SkeletonInfo;

/// Format generation whose field layout this decoder implements.
pub const SUPPORTED_VERSION: &str = "3.5";

/// Read the skeleton header. Returns the metadata and the nonessential flag.
pub(crate) fn read_header(cursor: &mut ByteCursor<'_>) -> Result<(SkeletonInfo, bool)> {
    let hash = cursor.read_string()?;
    let spine = cursor.read_string()?;
    let width = cursor.read_f32()?;
    let height = cursor.read_f32()?;
    let nonessential = cursor.read_bool()?;

    let (fps, images) = if nonessential {
        (Some(cursor.read_f32()?), cursor.read_string()?)
    } else {
        (None, None)
    };

    match spine.as_deref() {
        Some(version) if is_supported_version(version) => {
            info!(version, nonessential, "skeleton header");
        }
        Some(version) => {
            warn!(
                version,
                supported = SUPPORTED_VERSION,
                "skeleton was exported by a different version, output may be wrong"
            );
        }
        None => warn!("skeleton header has no version string"),
    }

    let info = SkeletonInfo {
        hash,
        spine,
        width,
        height,
        fps,
        images,
    };
    Ok((info, nonessential))
}

/// `3.5` and any `3.5.x` release.
pub fn is_supported_version(version: &str) -> bool {
    version == SUPPORTED_VERSION
        || version
            .strip_prefix(SUPPORTED_VERSION)
            .is_some_and(|rest| rest.starts_with('.'))
}
