use std::path::Path;
use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::application::services::assistant_service::AssistantService;
use crate::application::services::document_service::DocumentService;
use crate::application::services::project_store::ProjectStore;
use crate::application::services::settings_service::SettingsService;
use crate::domain::errors::DomainError;
use crate::domain::repositories::document_repository::DocumentRepository;
use crate::domain::repositories::language_model_repository::LanguageModelRepository;
use crate::domain::repositories::latex_compiler::LatexCompiler;
use crate::domain::repositories::settings_repository::SettingsRepository;
use crate::infrastructure::apis::ollama_repository::OllamaRepository;
use crate::infrastructure::compilers::process_latex_compiler::ProcessLatexCompiler;
use crate::infrastructure::persistence::file_system::DataDirectory;
use crate::infrastructure::repositories::file_document_repository::FileDocumentRepository;
use crate::infrastructure::repositories::file_settings_repository::FileSettingsRepository;

pub(super) struct AppServices {
    pub settings_service: Arc<SettingsService>,
    pub document_service: Arc<DocumentService>,
    pub assistant_service: Arc<AssistantService>,
    pub project_store: ProjectStore,
}

struct AppRepositories {
    document_repository: Arc<dyn DocumentRepository>,
    settings_repository: Arc<dyn SettingsRepository>,
    language_model_repository: Arc<dyn LanguageModelRepository>,
    compiler: Arc<dyn LatexCompiler>,
}

pub(super) async fn initialize_data_directory(
    data_root: &Path,
) -> Result<DataDirectory, DomainError> {
    let data_directory = DataDirectory::new(data_root.to_path_buf());
    data_directory.initialize().await?;
    Ok(data_directory)
}

pub(super) async fn build_services(
    data_directory: &DataDirectory,
) -> Result<AppServices, ApplicationError> {
    let repositories = build_repositories(data_directory)?;
    let workspace_dir = data_directory.workspace().to_path_buf();

    let settings_service =
        Arc::new(SettingsService::load(repositories.settings_repository).await?);
    let document_service = Arc::new(DocumentService::new(
        repositories.document_repository.clone(),
        workspace_dir.clone(),
    ));
    let assistant_service = Arc::new(AssistantService::new(
        repositories.language_model_repository.clone(),
        settings_service.clone(),
    ));
    let project_store = ProjectStore::new(
        repositories.document_repository,
        repositories.compiler,
        repositories.language_model_repository,
        settings_service.clone(),
        workspace_dir,
    )
    .await;

    Ok(AppServices {
        settings_service,
        document_service,
        assistant_service,
        project_store,
    })
}

fn build_repositories(data_directory: &DataDirectory) -> Result<AppRepositories, DomainError> {
    let document_repository: Arc<dyn DocumentRepository> = Arc::new(FileDocumentRepository::new());
    let settings_repository: Arc<dyn SettingsRepository> = Arc::new(FileSettingsRepository::new(
        data_directory.settings_file().to_path_buf(),
    ));
    let language_model_repository: Arc<dyn LanguageModelRepository> =
        Arc::new(OllamaRepository::new()?);
    let compiler: Arc<dyn LatexCompiler> = Arc::new(ProcessLatexCompiler::new());

    Ok(AppRepositories {
        document_repository,
        settings_repository,
        language_model_repository,
        compiler,
    })
}
