//! 输入读取
//!
//! 文本文件每行一个记号。能按十进制有符号整数解析的行进入输入序列，
//! 其余行（空行、小数、带前导空白、非 UTF-8 等）静默跳过。
//!
//! 解析规则与 `str::parse::<i64>` 一致：不裁剪空白，接受前导 `+`。

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// 输入错误
#[derive(Error, Debug)]
pub enum InputError {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 读取文件中的全部整数
pub fn read_numbers(path: impl AsRef<Path>) -> Result<Vec<i64>, InputError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let numbers = parse_numbers(BufReader::new(file)).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), count = numbers.len(), "输入读取完成");
    Ok(numbers)
}

/// 从任意缓冲读取器中逐行解析整数
pub fn parse_numbers<R: BufRead>(mut reader: R) -> io::Result<Vec<i64>> {
    let mut numbers = Vec::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break; // EOF
        }
        if let Some(n) = parse_line(&line) {
            numbers.push(n);
        }
    }

    Ok(numbers)
}

/// 解析单行（去掉行尾的 `\n` 与 `\r`），失败返回 None
pub fn parse_line(line: &[u8]) -> Option<i64> {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    std::str::from_utf8(line).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &[u8]) -> Vec<i64> {
        parse_numbers(Cursor::new(text)).unwrap()
    }

    #[test]
    fn test_skips_invalid_lines() {
        assert_eq!(parse(b"2\nabc\n3\n4\n5\n"), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_malformed_tokens() {
        for line in ["abc", "", "3.14", "  12", "12 ", "0x1f", "1e3", "9223372036854775808"] {
            assert_eq!(parse_line(line.as_bytes()), None, "{:?} should be skipped", line);
        }
    }

    #[test]
    fn test_signed_values() {
        assert_eq!(parse(b"-7\n+12\n-0\n"), vec![-7, 12, 0]);
        assert_eq!(parse_line(b"-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(parse(b"1\r\n2\r\n3"), vec![1, 2, 3]);
        assert_eq!(parse(b"\n\n\n"), Vec::<i64>::new());
    }

    #[test]
    fn test_invalid_utf8_is_skipped() {
        assert_eq!(parse(b"7\n\xff\xfe\n11\n"), vec![7, 11]);
    }

    #[test]
    fn test_missing_file() {
        let err = read_numbers("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, InputError::Open { .. }));
        assert_eq!(err.to_string(), "cannot open /definitely/not/here.txt");
        assert!(std::error::Error::source(&err).is_some());
    }
}
