pub mod d100_stats;
