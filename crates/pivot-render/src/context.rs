/// A globally shared graphics context.
pub struct GraphicsContext {
    pub instance: wgpu::Instance,
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl GraphicsContext {
    /// Creates a new graphics context synchronously.
    ///
    /// See [`GraphicsContext::new`] for the asynchronous version.
    pub fn new_sync() -> &'static Self {
        pollster::block_on(Self::new())
    }

    /// Creates a new graphics context asynchronously.
    ///
    /// This returns a static reference to simplify the public API and
    /// lifecycle: the context lives for the rest of the process, like the
    /// GPU resources it hands out.
    pub async fn new() -> &'static Self {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to find a suitable GPU adapter");

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                label: None,
                ..Default::default()
            })
            .await
            .expect("Failed to create device");

        tracing::info!("Created graphics context on {:?}", adapter.get_info().name);

        Box::leak(Box::new(Self {
            instance,
            adapter,
            device,
            queue,
        }))
    }

    /// Get adapter info
    pub fn info(&self) -> wgpu::AdapterInfo {
        self.adapter.get_info()
    }
}
