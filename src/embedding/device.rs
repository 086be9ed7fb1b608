use candle_core::Device;
use tracing::{debug, info, warn};

use super::error::EmbeddingError;

/// Picks the first usable accelerator compiled in, else the CPU.
///
/// Metal is tried before CUDA. A missing or broken GPU is never fatal.
pub fn select_device() -> Result<Device, EmbeddingError> {
    let mut failures: Vec<String> = Vec::new();

    for (name, open) in gpu_backends() {
        match open() {
            Ok(device) => {
                info!(backend = name, "Using GPU acceleration for embeddings");
                return Ok(device);
            }
            Err(e) => {
                warn!(backend = name, error = %e, "GPU device unavailable");
                failures.push(format!("{name} failed: {e}"));
            }
        }
    }

    if failures.is_empty() {
        debug!("No GPU backend compiled, embedding on CPU");
    } else {
        warn!(reason = %failures.join("; "), "Falling back to CPU device");
    }
    Ok(Device::Cpu)
}

type DeviceOpener = fn() -> candle_core::Result<Device>;

#[allow(clippy::vec_init_then_push, unused_mut)]
fn gpu_backends() -> Vec<(&'static str, DeviceOpener)> {
    let mut backends: Vec<(&'static str, DeviceOpener)> = Vec::new();
    #[cfg(feature = "metal")]
    backends.push(("metal", || Device::new_metal(0)));
    #[cfg(feature = "cuda")]
    backends.push(("cuda", || Device::new_cuda(0)));
    backends
}
