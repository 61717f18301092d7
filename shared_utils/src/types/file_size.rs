//! FileSize Type-Safe Wrapper
//!
//! 提供类型安全的文件大小操作和统一的兆字节格式。

use std::fmt;
use std::path::Path;

// ============================================================================
// FileSize Newtype
// ============================================================================

/// 类型安全的文件大小（字节）
///
/// # Examples
/// ```
/// use shared_utils::types::file_size::FileSize;
///
/// let size = FileSize::from_mb(100);
/// assert_eq!(size.bytes(), 104857600);
/// assert_eq!(size.display_mb(), "100.00 MB");
///
/// let ratio = FileSize::from_mb(40).compression_ratio(size);
/// assert_eq!(ratio, Some(0.4));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileSize(u64);

impl FileSize {
    /// 零大小
    pub const ZERO: FileSize = FileSize(0);

    /// 1 MB
    pub const MB: u64 = 1024 * 1024;

    /// 创建文件大小
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// 从 MB 创建
    #[inline]
    pub const fn from_mb(mb: u64) -> Self {
        Self(mb * Self::MB)
    }

    /// 读取文件的当前大小
    pub fn of_file(path: &Path) -> std::io::Result<Self> {
        std::fs::metadata(path).map(|m| Self(m.len()))
    }

    /// 获取原始字节数
    #[inline]
    pub const fn bytes(&self) -> u64 {
        self.0
    }

    /// 以 MB 为单位的大小（1 MB = 1024 × 1024 字节）
    #[inline]
    pub fn megabytes(&self) -> f64 {
        self.0 as f64 / Self::MB as f64
    }

    /// 固定以 MB 显示，保留两位小数，例如 `"40.00 MB"`
    pub fn display_mb(&self) -> String {
        format!("{:.2} MB", self.megabytes())
    }

    /// 计算压缩比（处理零除）
    ///
    /// 返回 self / original，如果 original 为零则返回 None。
    pub fn compression_ratio(&self, original: FileSize) -> Option<f64> {
        if original.0 == 0 {
            None
        } else {
            Some(self.0 as f64 / original.0 as f64)
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileSize({} = {})", self.0, self.display_mb())
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_mb())
    }
}

impl Default for FileSize {
    fn default() -> Self {
        Self::ZERO
    }
}

// ============================================================================
// Tests
// ============================================================================
