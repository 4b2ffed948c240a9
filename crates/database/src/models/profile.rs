//! 个人资料数据库模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 个人资料信息结构体
///
/// 全站单例：SQL 后端固定存放在 id = 1 的行，JSON 文件后端是文档顶层的单个对象，
/// 因此模型里不携带 id 字段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProfileInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github: String,
    pub twitter: String,
    pub linkedin: String,
    pub wechat: String,
    /// 逗号分隔的技能列表
    pub skills: String,
    pub avatar: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileInfo {
    /// 首次启动时的默认资料
    pub fn default_seed() -> Self {
        ProfileInfo {
            name: "煎饼".to_string(),
            title: "AI行动家".to_string(),
            bio: "专注于AI智能体开发与编程业务，探索人工智能的无限可能。".to_string(),
            email: "hello@jianbing.dev".to_string(),
            phone: String::new(),
            location: "中国".to_string(),
            github: String::new(),
            twitter: String::new(),
            linkedin: String::new(),
            wechat: String::new(),
            skills: "AI智能体,Python,LangChain,OpenAI,React,Node.js,TypeScript".to_string(),
            avatar: Some("/images/avatar.jpg".to_string()),
            updated_at: Utc::now(),
        }
    }
}

/// 个人资料更新参数
///
/// 普通字段全量覆盖；`avatar` 为 `None` 时保留原值
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github: String,
    pub twitter: String,
    pub linkedin: String,
    pub wechat: String,
    pub skills: String,
    pub avatar: Option<String>,
}
