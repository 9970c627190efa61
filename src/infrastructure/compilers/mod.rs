pub mod process_latex_compiler;
