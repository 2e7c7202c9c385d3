//! Test doubles shared by handler and router tests.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use infotech_core::{
    Config, CoreError, CreateModuleRequest, DeleteModuleRequest, InvocationContext,
    ModuleHandler, Prompter, RemoteError, RemoteRepository,
};

/// Prompter answering from a fixed script.
///
/// Questions are recorded; running out of answers is an error so a test
/// can never hang on an unexpected prompt.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| (*a).to_string()).collect(),
            questions: Vec::new(),
        }
    }

    fn next_answer(&mut self, question: &str) -> Result<String> {
        self.questions.push(question.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer for: {question}"))
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        let answer = self.next_answer(question)?;
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.next_answer(question)?;
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }
}

/// Remote host recording deletions and answering with a fixed result.
#[derive(Debug, Default)]
pub struct RecordingRemote {
    pub deleted: Mutex<Vec<(String, String)>>,
    pub unavailable: bool,
}

impl RemoteRepository for RecordingRemote {
    fn host_name(&self) -> &str {
        "GitHub"
    }

    fn delete_repository(&self, token: &str, module_name: &str) -> Result<(), RemoteError> {
        if self.unavailable {
            return Err(RemoteError::Unavailable);
        }
        self.deleted
            .lock()
            .expect("remote lock poisoned")
            .push((token.to_string(), module_name.to_string()));
        Ok(())
    }
}

/// Handler recording every request it receives.
#[derive(Debug, Default)]
pub struct RecordingHandler {
    pub created: Vec<CreateModuleRequest>,
    pub deleted: Vec<DeleteModuleRequest>,
}

impl ModuleHandler for RecordingHandler {
    fn create_module(
        &mut self,
        _ctx: &mut InvocationContext,
        request: &CreateModuleRequest,
    ) -> Result<(), CoreError> {
        self.created.push(request.clone());
        Ok(())
    }

    fn delete_module(
        &mut self,
        _ctx: &mut InvocationContext,
        request: &DeleteModuleRequest,
    ) -> Result<(), CoreError> {
        self.deleted.push(request.clone());
        Ok(())
    }
}

/// Invocation context rooted at `root`, with or without a credential.
pub fn context_in(root: &Path, token: Option<&str>) -> InvocationContext {
    let config = Config {
        github_token: token.map(str::to_string),
        modules_dir: Some(root.to_path_buf()),
    };
    InvocationContext::new(config, root.to_path_buf())
}
