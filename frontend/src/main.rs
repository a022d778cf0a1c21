use entity_auth_frontend::App;
use leptos::prelude::*;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

// Use lol_alloc as the global allocator for smaller WASM size
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

/// 日志输出到浏览器控制台（浏览器中没有 std::time，去掉时间戳）
fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry().with(fmt_layer).init();
}

pub fn main() {
    console_error_panic_hook::set_once();
    init_tracing();
    mount_to_body(App);
}
