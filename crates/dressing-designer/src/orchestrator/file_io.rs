//! Templates and whole-project replacement (new, load, save).

use dressing_core::{AppEvent, FileEvent, ProjectEvent};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

use super::{ProjectOrchestrator, Regeneration};
use crate::error::{DesignError, DesignResult, Rejection, RejectionCode};
use crate::project::FurnitureProject;
use crate::serialization::ProjectFile;
use crate::templates::ProjectTemplate;

impl ProjectOrchestrator {
    /// Replaces the layout with a template, keeping the project identity.
    /// Undoable like any other mutation.
    pub fn apply_template(&mut self, template: ProjectTemplate) -> DesignResult<()> {
        let built = template.build()?;

        self.transact("Apply template", move |project| {
            if project.locks.dimensions {
                return Err(Rejection::new(
                    RejectionCode::DimensionsLocked,
                    "Dimensions are locked",
                ));
            }
            if project.locks.dividers {
                return Err(Rejection::new(
                    RejectionCode::DividersLocked,
                    "Dividers are locked",
                ));
            }

            let id = project.id;
            let name = std::mem::take(&mut project.name);
            let created_at = project.metadata.created_at;

            *project = built;
            project.id = id;
            project.name = name;
            project.metadata.created_at = created_at;
            Ok(Regeneration::Components)
        })
    }

    pub fn apply_template_by_name(&mut self, name: &str) -> DesignResult<()> {
        let template: ProjectTemplate = name
            .parse()
            .map_err(|e: String| DesignError::rejected(RejectionCode::TemplateNotFound, e))?;
        self.apply_template(template)
    }

    /// Starts over on a default project.
    pub fn new_project(&mut self, name: impl Into<String>) {
        self.replace_project(FurnitureProject::new(name));
        self.current_file_path = None;
    }

    /// Replaces the current project wholesale. Components are regenerated
    /// so they match the parameters; history is cleared.
    pub fn load_project(&mut self, mut project: FurnitureProject) -> DesignResult<()> {
        if let Err(e) = project.regenerate() {
            error!("Loaded project {} does not generate: {}", project.name, e);
            return Err(DesignError::Generation(e));
        }
        self.replace_project(project);
        Ok(())
    }

    fn replace_project(&mut self, project: FurnitureProject) {
        self.project = Arc::new(project);
        self.refresh_derived();
        self.history.clear();
        self.is_modified = false;

        info!("Loaded project {}", self.project.name);
        self.publish(AppEvent::Project(ProjectEvent::Loaded {
            project_id: self.project.id.to_string(),
        }));
    }

    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = ProjectFile::new((*self.project).clone());

        if let Err(e) = file.save_to_file(path) {
            error!("{:#}", e);
            self.publish(AppEvent::File(FileEvent::SaveFailed {
                path: path.to_path_buf(),
                error: format!("{:#}", e),
            }));
            return Err(e);
        }

        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        info!("Saved {}", path.display());
        self.publish(AppEvent::File(FileEvent::Saved {
            path: path.to_path_buf(),
        }));
        Ok(())
    }

    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = ProjectFile::load_from_file(path)?;
        self.load_project(file.project)?;

        self.current_file_path = Some(path.to_path_buf());
        self.publish(AppEvent::File(FileEvent::Opened {
            path: path.to_path_buf(),
        }));
        Ok(())
    }

    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// File name, or project name for unsaved projects, with a trailing
    /// `*` when modified.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(&self.project.name);

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::orchestrator;
    use super::*;

    #[test]
    fn test_apply_template_is_undoable() {
        let mut orchestrator = orchestrator();
        let id = orchestrator.project().id;
        orchestrator
            .apply_template(ProjectTemplate::DressingThreeZones)
            .unwrap();
        assert_eq!(orchestrator.project().zones.len(), 3);
        assert_eq!(orchestrator.project().id, id);
        assert_eq!(orchestrator.project().name, "Untitled");

        orchestrator.undo().unwrap();
        assert_eq!(orchestrator.project().zones.len(), 1);
    }

    #[test]
    fn test_unknown_template_name() {
        let mut orchestrator = orchestrator();
        let err = orchestrator.apply_template_by_name("igloo").unwrap_err();
        assert_eq!(err.code(), Some(RejectionCode::TemplateNotFound));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hall.dressing");

        let mut orchestrator = orchestrator();
        orchestrator.add_divider(1000.0).unwrap();
        assert_eq!(orchestrator.display_name(), "Untitled*");
        orchestrator.save_to_file(&path).unwrap();
        assert_eq!(orchestrator.display_name(), "hall.dressing");
        let saved = orchestrator.snapshot();

        let mut other = super::super::tests::orchestrator();
        other.load_from_file(&path).unwrap();
        assert_eq!(other.project(), saved.as_ref());
        assert!(!other.can_undo());
    }

    #[test]
    fn test_new_project_clears_history() {
        let mut orchestrator = orchestrator();
        orchestrator.rename("Old").unwrap();
        orchestrator.new_project("Fresh");
        assert_eq!(orchestrator.project().name, "Fresh");
        assert!(!orchestrator.can_undo());
        assert!(!orchestrator.is_modified);
    }
}
