use std::sync::Arc;
use wgpu::{Adapter, Device, DeviceDescriptor, Features, Instance, Limits, Queue, Surface};

use super::error::InitError;

/// Shared GPU context
///
/// Provides a Device and Queue that can be cloned cheaply (Arc) and used
/// anywhere the renderer needs to upload data or encode work.
#[derive(Clone)]
pub struct GpuContext {
    device: Arc<Device>,
    queue: Arc<Queue>,
}

impl GpuContext {
    /// Create a GPU context from an already-selected adapter
    pub async fn new(adapter: &Adapter) -> Result<Self, InitError> {
        let (device, queue) = Self::request_device(adapter).await?;

        Ok(Self {
            device: Arc::new(device),
            queue: Arc::new(queue),
        })
    }

    /// Request an adapter compatible with the window surface
    pub async fn request_adapter(
        instance: &Instance,
        surface: &Surface<'_>,
    ) -> Result<Adapter, InitError> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await?;
        Ok(adapter)
    }

    /// Get reference to the device
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Get reference to the queue
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Request device and queue
    async fn request_device(adapter: &Adapter) -> Result<(Device, Queue), InitError> {
        let pair = adapter
            .request_device(&DeviceDescriptor {
                label: Some("GPU Context Device"),
                required_features: Features::empty(),
                required_limits: Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await?;
        Ok(pair)
    }
}
