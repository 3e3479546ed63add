// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库,中文为回落语言
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 支持的语言代码
pub const SUPPORTED_LOCALES: &[&str] = &["zh-CN", "en"];

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// 不在 [SUPPORTED_LOCALES] 内的语言代码会照常设置,
/// 查不到的键将回落到 zh-CN
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数）
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// 按 `%{key}` 占位符逐个替换
///
/// # 示例
/// ```no_run
/// use assembly_flow::i18n::t_with_args;
/// let msg = t_with_args("readiness.blocked_single", &[("name", "左侧门板")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
