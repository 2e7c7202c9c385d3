//! Create command handler.
//!
//! Creates the module directory under the modules root and records the
//! descriptor in its `module.json`. Template rendering is not done here:
//! the template identifier is stored for the generator that fills the
//! directory in later.

use std::fmt::Display;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use chrono::Utc;
use infotech_core::{
    CoreError, CreateModuleRequest, Difficulty, InvalidChoice, InvocationContext, Language,
    ModuleDescriptor, ModuleManifest, Prompter, is_kebab_case, validate_module_name,
};

use crate::presentation::{display_module_summary, print_success, print_warning};

/// Execute the create command.
///
/// # Errors
///
/// This function will return an error if:
/// - The module name cannot be used as a directory name
/// - A directory with that name already exists
/// - Prompting fails in interactive mode
/// - The directory or manifest cannot be written
pub fn execute(
    ctx: &mut InvocationContext,
    prompter: &mut dyn Prompter,
    request: &CreateModuleRequest,
) -> Result<(), CoreError> {
    validate_module_name(&request.module.name)?;

    if !is_kebab_case(&request.module.name) {
        let message = format!(
            "Module name '{}' is not kebab-case (e.g. python-basics)",
            request.module.name
        );
        print_warning(&message);
        ctx.warn(message);
    }

    let module = if request.interactive {
        prompt_for_details(prompter, request.module.clone())?
    } else {
        request.module.clone()
    };

    let root = ctx.modules_root().to_path_buf();
    fs::create_dir_all(&root).map_err(|e| CoreError::io("create", &root, e))?;

    let dir = ctx.module_dir(&module.name);
    tracing::debug!(module = %module.name, path = %dir.display(), "creating module");
    match fs::create_dir(&dir) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(CoreError::ModuleExists {
                name: module.name,
                path: dir,
            });
        }
        Err(e) => return Err(CoreError::io("create", &dir, e)),
    }

    write_manifest_or_remove(&ModuleManifest::new(&module, Utc::now()), &dir)?;

    print_success(&format!("Module '{}' created", module.name));
    display_module_summary(&module, &dir);

    Ok(())
}

/// Write the manifest into a freshly created `dir`, removing `dir` if that fails.
fn write_manifest_or_remove(manifest: &ModuleManifest, dir: &Path) -> Result<(), CoreError> {
    let Err(e) = manifest.write_to(dir) else {
        return Ok(());
    };
    if let Err(cleanup) = fs::remove_dir_all(dir) {
        tracing::warn!(path = %dir.display(), error = %cleanup, "failed to clean up module directory");
    }
    Err(e)
}

/// Ask for every descriptor field, offering the current values as defaults.
fn prompt_for_details(
    prompter: &mut dyn Prompter,
    mut module: ModuleDescriptor,
) -> Result<ModuleDescriptor, CoreError> {
    module.template = prompter.ask("Template", Some(&module.template))?;
    module.category = prompter.ask("Category", Some(&module.category))?;
    module.difficulty = prompt_choice(
        prompter,
        "Difficulty",
        Difficulty::CHOICES,
        module.difficulty,
    )?;
    module.language = prompt_choice(prompter, "Language", Language::CHOICES, module.language)?;
    Ok(module)
}

/// Ask until the answer parses as one of `choices`.
fn prompt_choice<T>(
    prompter: &mut dyn Prompter,
    label: &str,
    choices: &[&str],
    default: T,
) -> Result<T, CoreError>
where
    T: FromStr<Err = InvalidChoice> + Display,
{
    let question = format!("{label} ({})", choices.join("/"));
    let default = default.to_string();
    loop {
        let answer = prompter.ask(&question, Some(&default))?;
        match answer.parse() {
            Ok(value) => return Ok(value),
            Err(e) => eprintln!("{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{ScriptedPrompter, context_in};
    use tempfile::tempdir;

    fn request(name: &str, interactive: bool) -> CreateModuleRequest {
        CreateModuleRequest {
            module: ModuleDescriptor::new(name),
            interactive,
        }
    }

    #[test]
    fn test_creates_directory_with_manifest() {
        let temp = tempdir().unwrap();
        let mut ctx = context_in(temp.path(), None);
        let mut prompter = ScriptedPrompter::default();

        execute(&mut ctx, &mut prompter, &request("python-basics", false)).unwrap();

        let dir = temp.path().join("python-basics");
        let manifest = ModuleManifest::read_from(&dir).unwrap();
        assert_eq!(manifest.descriptor(), ModuleDescriptor::new("python-basics"));
        assert!(prompter.questions.is_empty());
        assert!(ctx.warnings().is_empty());
    }

    #[test]
    fn test_existing_directory_is_rejected() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("python-basics")).unwrap();
        let mut ctx = context_in(temp.path(), None);

        let err = execute(
            &mut ctx,
            &mut ScriptedPrompter::default(),
            &request("python-basics", false),
        )
        .unwrap_err();

        assert!(matches!(err, CoreError::ModuleExists { .. }));
        assert!(!ModuleManifest::exists_in(&temp.path().join("python-basics")));
    }

    #[test]
    fn test_missing_modules_root_is_created() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("nested/modules");
        let mut ctx = context_in(&root, None);

        execute(
            &mut ctx,
            &mut ScriptedPrompter::default(),
            &request("python-basics", false),
        )
        .unwrap();

        assert!(ModuleManifest::exists_in(&root.join("python-basics")));
    }

    #[test]
    fn test_existing_file_with_module_name_is_rejected() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("notes"), "not a module").unwrap();
        let mut ctx = context_in(temp.path(), None);

        let err = execute(&mut ctx, &mut ScriptedPrompter::default(), &request("notes", false))
            .unwrap_err();

        assert!(matches!(err, CoreError::ModuleExists { .. }));
        assert_eq!(fs::read_to_string(temp.path().join("notes")).unwrap(), "not a module");
    }

    #[test]
    fn test_failed_manifest_write_removes_directory() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("python-basics");
        // A directory where the manifest file should go makes the write fail.
        fs::create_dir_all(dir.join("module.json")).unwrap();

        let manifest = ModuleManifest::new(&ModuleDescriptor::new("python-basics"), Utc::now());
        let err = write_manifest_or_remove(&manifest, &dir).unwrap_err();

        assert!(matches!(err, CoreError::Io { action: "write", .. }));
        assert!(!dir.exists());
    }

    #[test]
    fn test_unsafe_name_is_rejected_before_touching_disk() {
        let temp = tempdir().unwrap();
        let mut ctx = context_in(temp.path(), None);

        let err = execute(
            &mut ctx,
            &mut ScriptedPrompter::default(),
            &request("../escape", false),
        )
        .unwrap_err();

        assert!(matches!(err, CoreError::InvalidModuleName { .. }));
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_non_kebab_name_warns_but_creates() {
        let temp = tempdir().unwrap();
        let mut ctx = context_in(temp.path(), None);

        execute(
            &mut ctx,
            &mut ScriptedPrompter::default(),
            &request("Python_Basics", false),
        )
        .unwrap();

        assert_eq!(ctx.warnings().len(), 1);
        assert!(ctx.warnings()[0].contains("kebab-case"));
        assert!(ModuleManifest::exists_in(&temp.path().join("Python_Basics")));
    }

    #[test]
    fn test_interactive_prompts_use_defaults_and_answers() {
        let temp = tempdir().unwrap();
        let mut ctx = context_in(temp.path(), None);
        // template: keep default, category: devops, difficulty: advanced, language: keep default
        let mut prompter = ScriptedPrompter::new(&["", "devops", "advanced", ""]);

        execute(&mut ctx, &mut prompter, &request("linux-admin", true)).unwrap();

        let manifest = ModuleManifest::read_from(&temp.path().join("linux-admin")).unwrap();
        assert_eq!(manifest.template, "module-basic");
        assert_eq!(manifest.category, "devops");
        assert_eq!(manifest.difficulty, Difficulty::Advanced);
        assert_eq!(manifest.language, Language::Ru);
        assert_eq!(prompter.questions.len(), 4);
        assert_eq!(prompter.questions[2], "Difficulty (beginner/intermediate/advanced)");
    }

    #[test]
    fn test_interactive_invalid_choice_reprompts() {
        let temp = tempdir().unwrap();
        let mut ctx = context_in(temp.path(), None);
        let mut prompter = ScriptedPrompter::new(&["", "", "expert", "intermediate", "de", "en"]);

        execute(&mut ctx, &mut prompter, &request("rust-intro", true)).unwrap();

        let manifest = ModuleManifest::read_from(&temp.path().join("rust-intro")).unwrap();
        assert_eq!(manifest.difficulty, Difficulty::Intermediate);
        assert_eq!(manifest.language, Language::En);
        assert_eq!(prompter.questions.len(), 6);
    }

    #[test]
    fn test_interactive_prompt_failure_creates_nothing() {
        let temp = tempdir().unwrap();
        let mut ctx = context_in(temp.path(), None);
        let mut prompter = ScriptedPrompter::new(&["module-basic"]);

        let err = execute(&mut ctx, &mut prompter, &request("rust-intro", true)).unwrap_err();

        assert!(matches!(err, CoreError::Prompt(_)));
        assert!(!temp.path().join("rust-intro").exists());
    }
}
