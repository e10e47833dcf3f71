use std::time::{SystemTime, UNIX_EPOCH};

pub fn format_bytes(bytes: usize) -> String {
    let s = bytes.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect::<String>() + " bytes"
}

pub fn format_modtime(time: SystemTime) -> String {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) if d.as_secs() == 0 => "epoch".to_string(),
        Ok(d) => format!("{}s", d.as_secs()),
        Err(_) => "before epoch".to_string(),
    }
}
