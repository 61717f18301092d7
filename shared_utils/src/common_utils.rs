//! Common Utilities Module
//!
//! 通用工具函数集合：
//! - 文件扩展名匹配
//! - 带上下文的目录创建
//! - 带错误分类的文件移动

use anyhow::{Context, Result};
use std::path::Path;

use crate::errors::ConvertError;

// ═══════════════════════════════════════════════════════════════
// 文件操作工具 (File Operations)
// ═══════════════════════════════════════════════════════════════

/// 检查文件名是否以 `.{extension}` 结尾（区分大小写）
///
/// 直接比较原始文件名字节，因此名为 `.mov` 的文件和非UTF-8文件名同样匹配。
///
/// # Examples
/// ```
/// use std::path::Path;
/// use shared_utils::common_utils::has_extension_suffix;
///
/// assert!(has_extension_suffix(Path::new("clip.mov"), "mov"));
/// assert!(has_extension_suffix(Path::new(".mov"), "mov"));
/// assert!(!has_extension_suffix(Path::new("clip.MOV"), "mov"));
/// assert!(!has_extension_suffix(Path::new("clip.mov.bak"), "mov"));
/// ```
pub fn has_extension_suffix(path: &Path, extension: &str) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.as_encoded_bytes();
    let ext = extension.as_bytes();
    name.len() > ext.len()
        && name.ends_with(ext)
        && name[name.len() - ext.len() - 1] == b'.'
}

/// 安全地创建目录（包括父目录）
///
/// 如果目录已存在则不报错。所有错误都包含目录路径上下文。
///
/// # Examples
/// ```no_run
/// use std::path::Path;
/// use shared_utils::common_utils::ensure_dir_exists;
///
/// ensure_dir_exists(Path::new("/tmp/Desktop/output")).unwrap();
/// ```
pub fn ensure_dir_exists(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))
}

/// 移动文件（rename），目标已存在时被覆盖
///
/// # Returns
/// 失败时返回 [`ConvertError::Relocate`]，包含源和目标路径
pub fn move_file(source: &Path, dest: &Path) -> crate::errors::Result<()> {
    std::fs::rename(source, dest).map_err(|source_err| ConvertError::Relocate {
        from: source.to_path_buf(),
        to: dest.to_path_buf(),
        source: source_err,
    })
}
