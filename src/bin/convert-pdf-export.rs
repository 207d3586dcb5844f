fn main() -> anyhow::Result<()> {
    convert_pdf_export::tools::cli::run()
}
