use tauri::ipc::Invoke;
use tauri::Wry;

use crate::presentation::commands::assistant_commands::{
    ask_ollama, autocomplete_latex, fix_latex_error, ollama_generate, ollama_list_models,
    to_latex_formula,
};
use crate::presentation::commands::compile_commands::{compile_latex, compile_project};
use crate::presentation::commands::dialog_commands::{
    open_file_dialog, pick_file, upload_pdf_dialog,
};
use crate::presentation::commands::document_commands::{
    copy_pdf_to_workspace, read_folder, read_pdf_base64, read_tex, read_text_file, write_text_file,
};
use crate::presentation::commands::project_commands::{
    append_at_cursor, apply_formula_to_editor, ask_fix_in_chat, clear_assistant,
    clear_pending_insert, clear_pending_replace, clear_toast, get_project_state, load_models,
    load_workspace_document, open_file, prompt_complete, prompt_fix_error, prompt_formula,
    rewrite_editor_content, save_file, send_chat, set_active_pdf_tab, set_cursor_context,
    set_ollama_model, set_ollama_url, set_selection, set_tex_content, set_toast, upload_pdf,
};
use crate::presentation::commands::settings_commands::{get_settings, update_settings};

pub fn invoke_handler() -> impl Fn(Invoke<Wry>) -> bool + Send + Sync + 'static {
    tauri::generate_handler![
        // Documents
        read_text_file,
        write_text_file,
        read_tex,
        read_pdf_base64,
        read_folder,
        copy_pdf_to_workspace,
        // Compile
        compile_latex,
        compile_project,
        // Assistant one-shots
        ollama_list_models,
        ollama_generate,
        ask_ollama,
        fix_latex_error,
        to_latex_formula,
        autocomplete_latex,
        // Project store
        get_project_state,
        set_tex_content,
        set_selection,
        set_cursor_context,
        set_active_pdf_tab,
        set_ollama_url,
        set_ollama_model,
        set_toast,
        clear_toast,
        apply_formula_to_editor,
        append_at_cursor,
        clear_pending_replace,
        clear_pending_insert,
        clear_assistant,
        load_workspace_document,
        open_file,
        save_file,
        upload_pdf,
        load_models,
        send_chat,
        ask_fix_in_chat,
        prompt_formula,
        prompt_fix_error,
        prompt_complete,
        rewrite_editor_content,
        // Settings
        get_settings,
        update_settings,
        // Dialogs
        pick_file,
        open_file_dialog,
        upload_pdf_dialog,
    ]
}
