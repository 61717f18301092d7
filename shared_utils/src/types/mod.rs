//! Type-Safe Wrappers Module
//!
//! 提供类型安全的包装器，将数学假设从注释提升到类型系统层面。
//!
//! ## 模块列表
//! - `file_size`: 文件大小类型安全包装

pub mod file_size;

// Re-exports for convenience
pub use file_size::FileSize;

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    // ========================================================================
    // *For any* byte count, display_mb renders the value in MB with exactly
    // two decimals, and parsing it back lands within half a hundredth of a MB.
    // ========================================================================
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn display_mb_two_decimals_property(bytes in 0u64..(1u64 << 44)) {
            let size = FileSize::new(bytes);
            let shown = size.display_mb();

            prop_assert!(shown.ends_with(" MB"), "missing unit: {}", shown);
            let number = shown.trim_end_matches(" MB");
            let decimals = number.split('.').nth(1).map(str::len);
            prop_assert_eq!(decimals, Some(2), "expected two decimals in {}", shown);

            let parsed: f64 = number.parse().unwrap();
            prop_assert!((parsed - size.megabytes()).abs() <= 0.005 + 1e-9);
        }

        #[test]
        fn whole_megabytes_display_exactly(mb in 0u64..1_000_000u64) {
            prop_assert_eq!(FileSize::from_mb(mb).display_mb(), format!("{}.00 MB", mb));
        }

        #[test]
        fn compression_ratio_safe_property(output in 0u64..u64::MAX, original in 0u64..u64::MAX) {
            let ratio = FileSize::new(output).compression_ratio(FileSize::new(original));
            if original == 0 {
                prop_assert!(ratio.is_none());
            } else {
                let r = ratio.unwrap();
                prop_assert!(r.is_finite() && r >= 0.0);
            }
        }
    }
}
