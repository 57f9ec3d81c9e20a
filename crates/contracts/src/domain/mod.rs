pub mod a001_barcode_record;
