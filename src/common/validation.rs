// src/common/validation.rs

use validator::ValidationError;

// Validador customizado: rejeita textos vazios ou só com espaços.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("این فیلد الزامی است.".into());
        return Err(err);
    }
    Ok(())
}
