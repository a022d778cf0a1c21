//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现核心库的 `TokenStore`。

use entity_auth::TokenStore;

/// 本地存储操作封装
///
/// 访问浏览器 LocalStorage API，页面刷新后数据仍在，作用域为当前源。
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStorage {
    /// 获取存储的字符串值
    ///
    /// # 返回
    /// - `Some(String)` 如果键存在且有值
    /// - `None` 如果键不存在或发生错误（例如隐私模式禁用了存储）
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 设置存储值
    ///
    /// # 返回
    /// - `true` 如果操作成功
    /// - `false` 如果操作失败（配额已满或存储不可用）
    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }
}
