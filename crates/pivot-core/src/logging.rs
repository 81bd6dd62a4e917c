pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter("info,wgpu_core=warn,wgpu_hal=warn,naga=warn,winit=warn")
        .init();
}
