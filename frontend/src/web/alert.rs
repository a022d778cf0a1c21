//! 阻塞式提示
//!
//! 对应浏览器原生 `window.alert`，用于无字段映射的错误。

use tracing::warn;

/// 弹出阻塞式提示框
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            let _ = window.alert_with_message(message);
        }
        None => warn!(%message, "no window available for alert"),
    }
}
