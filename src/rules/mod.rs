pub mod numeral;
