/// Sink for the signals the field hands back to its host: the accepted
/// value, the validity verdict with a human-readable message, and a
/// blocking flag the host should reflect on surrounding controls (for
/// example, disabling its save action while the slug is invalid).
pub trait FieldEmitter: Send + Sync {
    fn emit_value(&self, value: &str);

    fn emit_validity(&self, valid: bool, message: Option<&str>);

    fn emit_blocking(&self, blocked: bool);
}
