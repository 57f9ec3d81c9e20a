use rust_xlsxwriter::{Format, Workbook};

use super::types::CodecError;

/// Кодировщик: строки таблицы -> байты файла с одним листом
pub trait SheetEncoder {
    fn encode(
        &self,
        sheet_name: &str,
        headers: &[&str],
        rows: &[Vec<String>],
    ) -> Result<Vec<u8>, CodecError>;
}

/// Кодировщик .xlsx на rust_xlsxwriter
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxEncoder;

impl SheetEncoder for XlsxEncoder {
    fn encode(
        &self,
        sheet_name: &str,
        headers: &[&str],
        rows: &[Vec<String>],
    ) -> Result<Vec<u8>, CodecError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        {
            let sheet = workbook.add_worksheet();
            sheet.set_name(sheet_name)?;

            for (col, header) in headers.iter().enumerate() {
                sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
            }

            for (idx, row) in rows.iter().enumerate() {
                let row_num = idx as u32 + 1;
                for (col, value) in row.iter().enumerate() {
                    // Пустые значения не пишем: ячейка остаётся пустой
                    if value.is_empty() {
                        continue;
                    }
                    sheet.write_string(row_num, col as u16, value.as_str())?;
                }
            }

            sheet.autofit();
        }

        Ok(workbook.save_to_buffer()?)
    }
}
