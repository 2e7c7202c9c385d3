//! Delete command handler.
//!
//! Removes a module directory from the modules root. Only directories
//! carrying a `module.json` are considered modules; anything else is
//! refused so a mistyped name never deletes unrelated files.

use std::fs;

use infotech_core::{
    CoreError, DeleteModuleRequest, InvocationContext, MANIFEST_FILE_NAME, ModuleManifest,
    Prompter, RemoteError, RemoteRepository, validate_module_name,
};

use crate::presentation::{display_module_summary, print_success, print_warning};

/// Execute the delete command.
///
/// Confirms with the user unless `force` is set, removes the module
/// directory, then handles the remote repository when `remove_repo` is set.
///
/// # Errors
///
/// This function will return an error if:
/// - The module does not exist or is not a module directory
/// - User input fails
/// - The directory cannot be removed
/// - The remote host fails the repository deletion
pub fn execute(
    ctx: &mut InvocationContext,
    prompter: &mut dyn Prompter,
    remote: &dyn RemoteRepository,
    request: &DeleteModuleRequest,
) -> Result<(), CoreError> {
    validate_module_name(&request.name)?;

    let dir = ctx.module_dir(&request.name);
    if !dir.exists() {
        return Err(CoreError::ModuleNotFound {
            name: request.name.clone(),
            path: dir,
        });
    }
    if !ModuleManifest::exists_in(&dir) {
        return Err(CoreError::NotAModule {
            path: dir,
            manifest: MANIFEST_FILE_NAME,
        });
    }

    if !request.force {
        match ModuleManifest::read_from(&dir) {
            Ok(manifest) => display_module_summary(&manifest.descriptor(), &dir),
            Err(e) => tracing::warn!(error = %e, "could not read module manifest"),
        }
        println!();

        let question = if request.remove_repo {
            format!(
                "Are you sure you want to delete module '{}' and its {} repository?",
                request.name,
                remote.host_name()
            )
        } else {
            format!("Are you sure you want to delete module '{}'?", request.name)
        };
        if !prompter.confirm(&question)? {
            println!("Delete operation cancelled.");
            return Ok(());
        }
    }

    tracing::debug!(module = %request.name, path = %dir.display(), "deleting module");
    fs::remove_dir_all(&dir).map_err(|e| CoreError::io("remove", &dir, e))?;
    print_success(&format!("Module '{}' deleted", request.name));

    if request.remove_repo {
        remove_remote_repository(ctx, remote, &request.name)?;
    }

    Ok(())
}

fn remove_remote_repository(
    ctx: &mut InvocationContext,
    remote: &dyn RemoteRepository,
    name: &str,
) -> Result<(), CoreError> {
    let host = remote.host_name().to_string();
    let Some(token) = ctx.config().github_token.clone() else {
        let message = format!(
            "{} is not set; skipping {host} repository removal for '{name}'",
            infotech_core::GITHUB_TOKEN_VAR
        );
        print_warning(&message);
        ctx.warn(message);
        return Ok(());
    };

    match remote.delete_repository(&token, name) {
        Ok(()) => {
            print_success(&format!("{host} repository '{name}' deleted"));
            Ok(())
        }
        Err(RemoteError::Unavailable) => {
            let message = format!(
                "{host} repository management is not available; remove '{name}' manually if it exists"
            );
            print_warning(&message);
            ctx.warn(message);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
