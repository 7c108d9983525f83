/// Estimated transferred bytes per result row.
///
/// Payload sizes are derived from row counts with this constant, never
/// measured on the wire.
pub const PAYLOAD_BYTES_PER_ROW: u64 = 250;
