use crate::camera::frame::{RawFrame, decode_frame};

use face_enroll_core::{CoreResult, EnrollError, MediaDevices, VideoConstraints, VideoStream};

use std::{
    panic::Location,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
    io,
    thread::JoinHandle,
    time::Duration,
};

use async_trait::async_trait;
use error_location::ErrorLocation;
use image::DynamicImage;
use tokio::sync::oneshot;
use tracing::{debug, info, instrument, warn};
use v4l::{Device, FourCC, Format, buffer::Type, io::mmap::Stream, io::traits::CaptureStream, video::Capture};

const BUFFER_COUNT: u32 = 4;

/// Longest a single dequeue may block before the capture thread rechecks
/// whether it is still wanted.
const FRAME_TIMEOUT: Duration = Duration::from_millis(500);

/// Video4Linux2 camera at `/dev/video{index}`.
///
/// Each granted stream runs its own capture thread that keeps the most
/// recent frame. The thread exits within [`FRAME_TIMEOUT`] of the stream
/// being stopped or the request being abandoned, even on a stalled device.
#[derive(Debug, Clone)]
pub(crate) struct V4l2Camera {
    device_index: u32,
}

impl V4l2Camera {
    pub(crate) fn new(device_index: u32) -> Self {
        Self { device_index }
    }
}

#[async_trait]
impl MediaDevices for V4l2Camera {
    #[instrument(skip(self), fields(device_index = self.device_index))]
    async fn open_video(&self, constraints: &VideoConstraints) -> CoreResult<Box<dyn VideoStream>> {
        debug!(facing = ?constraints.facing, "Facing hint not supported by V4L2, ignored");

        let (ready_tx, ready_rx) = oneshot::channel();
        let latest = Arc::new(Mutex::new(None));
        let shutdown = Arc::new(AtomicBool::new(false));

        let worker = {
            let index = self.device_index;
            let (width, height) = (constraints.width, constraints.height);
            let latest = Arc::clone(&latest);
            let shutdown = Arc::clone(&shutdown);

            std::thread::Builder::new()
                .name(format!("v4l2-capture-{}", index))
                .spawn(move || capture_loop(index, width, height, ready_tx, latest, shutdown))
                .map_err(|e| EnrollError::DeviceError {
                    reason: format!("Failed to spawn capture thread: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?
        };

        let mut stream = V4l2Stream {
            latest,
            shutdown,
            worker: Some(worker),
        };

        match ready_rx.await {
            Ok(Ok(format)) => {
                info!(
                    width = format.width,
                    height = format.height,
                    fourcc = %format.fourcc,
                    "Camera streaming"
                );
                Ok(Box::new(stream))
            }
            Ok(Err(reason)) => {
                stream.stop();
                Err(EnrollError::CameraUnavailable {
                    reason,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(_) => {
                stream.stop();
                Err(EnrollError::CameraUnavailable {
                    reason: "capture thread exited before the first frame".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }
}

pub(crate) struct V4l2Stream {
    latest: Arc<Mutex<Option<RawFrame>>>,
    shutdown: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl V4l2Stream {
    #[cfg(test)]
    pub(crate) fn with_worker(worker: JoinHandle<()>) -> (Self, Arc<AtomicBool>) {
        let shutdown = Arc::new(AtomicBool::new(false));
        let stream = Self {
            latest: Arc::new(Mutex::new(None)),
            shutdown: Arc::clone(&shutdown),
            worker: Some(worker),
        };
        (stream, shutdown)
    }
}

impl VideoStream for V4l2Stream {
    fn grab_frame(&mut self) -> CoreResult<DynamicImage> {
        let frame = self
            .latest
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();

        match frame {
            Some(frame) => decode_frame(&frame),
            None => Err(EnrollError::DeviceError {
                reason: "no frame available".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Signal the capture thread and return without waiting on it.
    ///
    /// Runs on the workflow's thread, so a worker still inside a dequeue is
    /// handed to a reaper thread instead of being joined here.
    fn stop(&mut self) {
        self.shutdown.store(true, Ordering::Release);

        let Some(worker) = self.worker.take() else {
            return;
        };

        if worker.is_finished() {
            reap(worker);
            return;
        }

        let spawned = std::thread::Builder::new()
            .name("v4l2-reaper".to_string())
            .spawn(move || reap(worker));

        if let Err(e) = spawned {
            warn!(error = %e, "Failed to spawn reaper, capture thread detached");
        }
    }
}

impl Drop for V4l2Stream {
    fn drop(&mut self) {
        self.stop();
    }
}

fn reap(worker: JoinHandle<()>) {
    if worker.join().is_err() {
        warn!("Capture thread panicked");
    }
    debug!("Capture thread stopped");
}

fn open_stream(device: &Device) -> Result<Stream<'_>, String> {
    let mut stream = Stream::with_buffers(device, Type::VideoCapture, BUFFER_COUNT)
        .map_err(|e| format!("Failed to create stream: {}", e))?;
    stream.set_timeout(FRAME_TIMEOUT);
    Ok(stream)
}

fn open_device(index: u32, width: u32, height: u32) -> Result<(Device, Format), String> {
    let device = Device::new(index as usize)
        .map_err(|e| format!("Failed to open /dev/video{}: {}", index, e))?;

    let mut fmt = device
        .format()
        .map_err(|e| format!("Failed to get format: {}", e))?;

    fmt.width = width;
    fmt.height = height;
    if fmt.fourcc != FourCC::new(b"GREY") {
        fmt.fourcc = FourCC::new(b"MJPG");
    }

    let fmt = match device.set_format(&fmt) {
        Ok(actual) => actual,
        Err(e) => {
            warn!(error = %e, "Could not set requested format, using device defaults");
            device
                .format()
                .map_err(|e| format!("Failed to get final format: {}", e))?
        }
    };

    if fmt.width != width || fmt.height != height {
        info!(
            requested = ?(width, height),
            granted = ?(fmt.width, fmt.height),
            "Camera granted a different resolution"
        );
    }

    Ok((device, fmt))
}

fn capture_loop(
    index: u32,
    width: u32,
    height: u32,
    ready_tx: oneshot::Sender<Result<Format, String>>,
    latest: Arc<Mutex<Option<RawFrame>>>,
    shutdown: Arc<AtomicBool>,
) {
    let mut ready_tx = Some(ready_tx);

    let refuse = |ready_tx: &mut Option<oneshot::Sender<Result<Format, String>>>, reason: String| {
        match ready_tx.take() {
            Some(tx) => {
                let _ = tx.send(Err(reason));
            }
            None => warn!(reason = %reason, "Camera stream ended"),
        }
    };

    let (device, format) = match open_device(index, width, height) {
        Ok(opened) => opened,
        Err(reason) => return refuse(&mut ready_tx, reason),
    };

    let mut stream = match open_stream(&device) {
        Ok(stream) => stream,
        Err(reason) => return refuse(&mut ready_tx, reason),
    };

    while !shutdown.load(Ordering::Acquire) {
        let dequeued = stream.next().map(|(buf, meta)| {
            let used = match meta.bytesused as usize {
                0 => buf.len(),
                n => n.min(buf.len()),
            };
            buf[..used].to_vec()
        });

        let data = match dequeued {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::TimedOut => {
                if ready_tx.as_ref().is_some_and(|tx| tx.is_closed()) {
                    debug!("Camera request abandoned while waiting for a frame");
                    return;
                }

                debug!("No frame within timeout");

                // The timed-out buffer is still queued; restart with a fresh set.
                drop(stream);
                stream = match open_stream(&device) {
                    Ok(stream) => stream,
                    Err(reason) => return refuse(&mut ready_tx, reason),
                };
                continue;
            }
            Err(e) => return refuse(&mut ready_tx, format!("Failed to dequeue frame: {}", e)),
        };

        *latest.lock().unwrap_or_else(|e| e.into_inner()) = Some(RawFrame {
            fourcc: format.fourcc.repr,
            width: format.width,
            height: format.height,
            data,
        });

        if let Some(tx) = ready_tx.take() {
            if tx.send(Ok(format.clone())).is_err() {
                debug!("Camera request abandoned before the first frame");
                return;
            }
        }
    }
}
