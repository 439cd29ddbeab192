pub mod lead_magnets;
