// ==========================================
// 装配车间生产跟踪系统 - 生成档案文件存储
// ==========================================
// 职责: 生成档案的 JSON 文件读写
// 存储位置: 配置目录 assembly-flow/profiles/ (可注入)
// ==========================================

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::{ConfigError, ConfigResult};
use super::generation_profile::GenerationProfile;

// ==========================================
// ProfileStore - 档案存储
// ==========================================
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    /// 在指定目录上打开档案存储（目录不存在时创建）
    pub fn open(dir: impl Into<PathBuf>) -> ConfigResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "档案存储已打开");
        Ok(Self { dir })
    }

    /// 在系统配置目录下打开缺省档案存储
    pub fn open_default() -> ConfigResult<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| ConfigError::Invalid("无法定位系统配置目录".to_string()))?;
        Self::open(base.join("assembly-flow").join("profiles"))
    }

    /// 存储目录
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 保存档案（同 ID 覆盖）
    pub fn save(&self, profile: &GenerationProfile) -> ConfigResult<()> {
        if profile.profile_id.trim().is_empty() {
            return Err(ConfigError::Invalid("档案 ID 不能为空".to_string()));
        }
        if profile.include_steps.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "档案 {} 的工序选择集为空",
                profile.profile_id
            )));
        }

        let path = self.profile_path(&profile.profile_id);
        let json = serde_json::to_string_pretty(profile)?;
        fs::write(&path, json)?;
        info!(profile_id = %profile.profile_id, path = %path.display(), "档案已保存");
        Ok(())
    }

    /// 按 ID 加载档案
    pub fn load(&self, profile_id: &str) -> ConfigResult<GenerationProfile> {
        let path = self.profile_path(profile_id);
        if !path.exists() {
            return Err(ConfigError::NotFound(profile_id.to_string()));
        }
        let json = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// 列出全部档案（按文件名排序）
    pub fn list(&self) -> ConfigResult<Vec<GenerationProfile>> {
        let mut paths: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().map(|ext| ext == "json").unwrap_or(false))
            .collect();
        paths.sort();

        let mut profiles = Vec::with_capacity(paths.len());
        for path in paths {
            let json = fs::read_to_string(&path)?;
            profiles.push(serde_json::from_str(&json)?);
        }
        Ok(profiles)
    }

    /// 按 ID 删除档案
    pub fn delete(&self, profile_id: &str) -> ConfigResult<()> {
        let path = self.profile_path(profile_id);
        if !path.exists() {
            return Err(ConfigError::NotFound(profile_id.to_string()));
        }
        fs::remove_file(&path)?;
        info!(profile_id = %profile_id, "档案已删除");
        Ok(())
    }

    fn profile_path(&self, profile_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", profile_id))
    }
}
