//! `.properties` 文本解析
//!
//! 支持 `key=value`、`key:value`、`key value` 三种分隔，`#`/`!` 注释，
//! 行尾反斜杠续行与常见转义。重复键以后出现者为准。

use injection_common::ConfigError;
use std::collections::HashMap;

/// 解析 `.properties` 文本
pub fn parse_properties(text: &str) -> Result<HashMap<String, String>, ConfigError> {
    let mut entries = HashMap::new();

    for (line_no, logical) in logical_lines(text) {
        let (raw_key, raw_value) = split_key_value(&logical);
        let key = unescape(raw_key, line_no)?;
        let value = unescape(raw_value, line_no)?;
        entries.insert(key, value);
    }

    Ok(entries)
}

/// 合并续行并剔除注释与空行，返回 (起始行号, 逻辑行)
fn logical_lines(text: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut current: Option<(usize, String)> = None;

    for (index, raw) in text.lines().enumerate() {
        let trimmed = raw.trim_start();

        let (start, mut buffer) = match current.take() {
            Some(pending) => pending,
            None => {
                if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                    continue;
                }
                (index + 1, String::new())
            }
        };

        if ends_with_continuation(trimmed) {
            buffer.push_str(&trimmed[..trimmed.len() - 1]);
            current = Some((start, buffer));
        } else {
            buffer.push_str(trimmed);
            lines.push((start, buffer));
        }
    }

    if let Some(pending) = current {
        lines.push(pending);
    }

    lines
}

/// 行尾是否为奇数个反斜杠
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

/// 在第一个未转义的分隔符处切分
fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;

    for (index, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '=' | ':' => return (&line[..index], line[index + 1..].trim_start()),
            c if c.is_whitespace() => {
                let rest = line[index..].trim_start();
                let rest = rest
                    .strip_prefix('=')
                    .or_else(|| rest.strip_prefix(':'))
                    .unwrap_or(rest);
                return (&line[..index], rest.trim_start());
            }
            _ => {}
        }
    }

    (line, "")
}

fn unescape(raw: &str, line_no: usize) -> Result<String, ConfigError> {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('t') => result.push('\t'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('f') => result.push('\u{000C}'),
            Some('u') => {
                let unit = read_code_unit(&mut chars, line_no)?;
                let decoded = if (0xD800..=0xDBFF).contains(&unit) {
                    // 高位代理项必须紧跟 `\uXXXX` 低位代理项
                    let mut lookahead = chars.clone();
                    if lookahead.next() != Some('\\') || lookahead.next() != Some('u') {
                        return Err(malformed_escape(line_no, format!("{:04X}", unit)));
                    }
                    chars = lookahead;
                    let low = read_code_unit(&mut chars, line_no)?;
                    char::decode_utf16([unit, low])
                        .next()
                        .and_then(Result::ok)
                        .ok_or_else(|| {
                            malformed_escape(line_no, format!("{:04X}\\u{:04X}", unit, low))
                        })?
                } else {
                    char::from_u32(u32::from(unit))
                        .ok_or_else(|| malformed_escape(line_no, format!("{:04X}", unit)))?
                };
                result.push(decoded);
            }
            Some(other) => result.push(other),
            None => {}
        }
    }

    Ok(result)
}

/// 读取 `\u` 之后的 4 位十六进制 UTF-16 代码单元
fn read_code_unit(chars: &mut std::str::Chars<'_>, line_no: usize) -> Result<u16, ConfigError> {
    let hex: String = chars.by_ref().take(4).collect();
    u16::from_str_radix(&hex, 16)
        .ok()
        .filter(|_| hex.len() == 4)
        .ok_or_else(|| malformed_escape(line_no, hex))
}

fn malformed_escape(line_no: usize, escape: String) -> ConfigError {
    ConfigError::invalid_value(
        format!("line {}", line_no),
        format!("malformed \\u escape: \\u{}", escape),
    )
}
