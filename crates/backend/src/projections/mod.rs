pub mod p900_barcode_export;
