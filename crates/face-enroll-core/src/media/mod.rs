mod constraints;
mod device;
mod file;
mod preview;
mod still;

pub(crate) use still::{STILL_MEDIA_TYPE, encode_still};

pub use {
    constraints::{FacingMode, VideoConstraints},
    device::{DeviceStream, MediaDevices, VideoStream},
    file::SelectedFile,
    preview::{PreviewHandle, PreviewProvider},
};
