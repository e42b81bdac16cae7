// src/common/format.rs

// Rótulos compartilhados pelos formulários do painel.
pub const NO_DEADLINE: &str = "بدون موعد";
pub const HOUR_PREFIX: &str = "ساعت";
pub const UNKNOWN_OWNER: &str = "نامشخص";

const BYTE_UNITS: [&str; 4] = ["بایت", "کیلوبایت", "مگابایت", "گیگابایت"];

// Trata string vazia (ou só espaços) como ausente.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// Rótulo de SLA de uma atribuição: "data · hora", "data", "ساعت hora" ou "sem prazo".
pub fn sla_label(date: Option<&str>, time: Option<&str>) -> String {
    match (non_blank(date), non_blank(time)) {
        (Some(date), Some(time)) => format!("{date} · {time}"),
        (Some(date), None) => date.to_string(),
        (None, Some(time)) => format!("{HOUR_PREFIX} {time}"),
        (None, None) => NO_DEADLINE.to_string(),
    }
}

// Prazo de uma ação customizada. Hora e minuto ausentes viram "00".
pub fn action_due_label(date: Option<&str>, hour: Option<&str>, minute: Option<&str>) -> String {
    let hour = non_blank(hour);
    let minute = non_blank(minute);
    let clock = || format!("{}:{}", hour.unwrap_or("00"), minute.unwrap_or("00"));

    if let Some(date) = non_blank(date) {
        format!("{date} · {}", clock())
    } else if hour.is_some() || minute.is_some() {
        format!("{HOUR_PREFIX} {}", clock())
    } else {
        NO_DEADLINE.to_string()
    }
}

// Tamanho legível em unidades persas, base 1024.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return format!("0 {}", BYTE_UNITS[0]);
    }

    let bytes = bytes as f64;
    let index = ((bytes.ln() / 1024f64.ln()).floor() as usize).min(BYTE_UNITS.len() - 1);
    let size = bytes / 1024f64.powi(index as i32);

    if size >= 10.0 {
        format!("{:.0} {}", size, BYTE_UNITS[index])
    } else {
        format!("{:.1} {}", size, BYTE_UNITS[index])
    }
}
