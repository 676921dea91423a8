//! Common test utilities for Shipwright integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test project with its own template store, for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new test project with a configured compose directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::write(path.join("shipwright.yml"), "compose_dir: docker\n")
            .expect("Failed to write project config");
        Self { temp, path }
    }

    /// Create a test directory without a project configuration
    pub fn without_config() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Path of the compose directory
    pub fn compose_dir(&self) -> PathBuf {
        self.path.join("docker")
    }

    /// Path of the aggregate docker-compose.yml
    pub fn aggregate_path(&self) -> PathBuf {
        self.compose_dir().join("docker-compose.yml")
    }

    /// Path of the template store used by this test
    pub fn store_dir(&self) -> PathBuf {
        self.path.join("store-cache")
    }

    /// Seed a compose bundle into the template store
    pub fn seed_store_compose(
        &self,
        id: &str,
        version: Option<&str>,
        fragment: &str,
        dockerfile: Option<&str>,
        prompt: Option<&str>,
    ) {
        let mut dir = self.store_dir().join("compose").join(id);
        if let Some(version) = version {
            dir = dir.join(version);
        }
        std::fs::create_dir_all(&dir).expect("Failed to create store directory");
        std::fs::write(dir.join(format!("{id}.yml")), fragment)
            .expect("Failed to write store fragment");
        if let Some(dockerfile) = dockerfile {
            std::fs::write(dir.join("Dockerfile"), dockerfile)
                .expect("Failed to write store Dockerfile");
        }
        if let Some(prompt) = prompt {
            std::fs::write(dir.join("prompt.yml"), prompt).expect("Failed to write store prompt");
        }
    }

    /// Seed a package bundle into the template store
    pub fn seed_store_package(&self, id: &str, fragment: &str) {
        let dir = self.store_dir().join("package").join(id);
        std::fs::create_dir_all(&dir).expect("Failed to create store directory");
        std::fs::write(dir.join(format!("{id}.yml")), fragment)
            .expect("Failed to write store fragment");
    }

    /// Install a template directly into the project (as a prior add
    /// would have done)
    pub fn install_template(&self, id: &str, fragment: &str, prompt: Option<&str>) {
        let dir = self.compose_dir().join(id);
        std::fs::create_dir_all(&dir).expect("Failed to create template directory");
        std::fs::write(dir.join("docker-compose.dist"), fragment)
            .expect("Failed to write fragment");
        if let Some(prompt) = prompt {
            std::fs::write(dir.join("prompt.yml"), prompt).expect("Failed to write prompt");
        }
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// A shipwright command wired to this project and its store, with
    /// the catalog pointed at an unreachable address so no test can
    /// accidentally hit the network.
    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = shipwright_cmd();
        cmd.current_dir(&self.path)
            .env("SHIPWRIGHT_CACHE_DIR", self.store_dir())
            .env("SHIPWRIGHT_CATALOG_URL", "http://127.0.0.1:1")
            .env_remove("SHIPWRIGHT_PROJECT");
        cmd
    }
}

/// A plain shipwright command
#[allow(dead_code, deprecated)]
pub fn shipwright_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("shipwright").expect("Failed to find shipwright binary")
}
