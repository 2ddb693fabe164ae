//! User-facing strings (pt-BR).

pub const NOT_A_PDF: &str = "Por favor, selecione apenas arquivos PDF.";
pub const COMPRESSION_FAILED: &str = "Erro ao comprimir o PDF. Tente novamente.";
pub const NO_FILE: &str = "Nenhum arquivo selecionado.";
pub const DONE: &str = "Compressão concluída!";

pub fn page_label(page: usize, page_count: usize) -> String {
    format!("Comprimindo página {}/{}...", page, page_count)
}
