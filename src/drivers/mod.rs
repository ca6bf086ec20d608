// Hardware drivers: chip-level and protocol-level, board-independent.
//
// Each module is generic over embedded-hal traits or a small local
// trait; only pin assignments and bus wiring (in board/) are
// board-specific.

pub mod input;
pub mod ssd1306;
