use core::time::Duration;

use super::error::LineCol;
use super::{percentile, OutputEq, Report};
use crate::env::Size;
use crate::input::IStr;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_report_from_sorted() {
    let samples = (1..=100).map(ms).collect::<Vec<_>>();
    let report = Report::from_sorted(&samples);

    assert_eq!(report.count, 100);
    assert_eq!(report.min, ms(1));
    assert_eq!(report.max, ms(100));
    assert_eq!(report.p50, ms(50));
    assert_eq!(report.p99, ms(99));
    assert_eq!(report.avg, Duration::from_micros(50_500));
}

#[test]
fn test_empty_report() {
    let report = Report::from_sorted(&[]);
    assert_eq!(report.count, 0);
    assert_eq!(report.avg, Duration::default());
    assert_eq!(percentile(&[], 95), Duration::default());
}

#[test]
fn test_output_eq() {
    assert!((4361u64, 467835u64).output_eq(&(4361, 467835)));
    assert!(!(4361u64, 0u64).output_eq(&(4361, 467835)));
}

#[test]
fn test_line_col_display() {
    assert_eq!(LineCol::new(0, 0, 0).to_string(), "1:1");
    assert_eq!(LineCol::new(2, 4, 7).to_string(), "3:5-7");
}

#[cfg(not(prod))]
#[test]
fn test_error_context_locates_span() {
    let data = IStr::new(b"12\n3 x\n", Size::ZERO);
    let mut input = data;

    assert_eq!(input.line::<u32>().unwrap(), 12);
    let error = input.line::<[u32; 2]>().unwrap_err();

    let error = super::error_context("inputs/d00.txt", data, error);
    assert_eq!(error.to_string(), "inputs/d00.txt:2:3");
}
