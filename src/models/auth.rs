// src/models/auth.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Technician,
    Client,
}

// Dados fixos de cada papel (nome e avatar exibidos no painel)
#[derive(Debug, Clone, Copy)]
pub struct RoleTemplate {
    pub name: &'static str,
    pub avatar: &'static str,
    pub default_email: &'static str,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Technician, UserRole::Client];

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Technician => "technician",
            UserRole::Client => "client",
        }
    }

    // Valor gravado no armazenamento local -> papel. Qualquer outra coisa é None.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(UserRole::Admin),
            "technician" => Some(UserRole::Technician),
            "client" => Some(UserRole::Client),
            _ => None,
        }
    }

    pub fn home_path(self) -> &'static str {
        match self {
            UserRole::Admin => "/dashboard",
            UserRole::Technician => "/dashboard/technician",
            UserRole::Client => "/dashboard/client",
        }
    }

    pub fn template(self) -> RoleTemplate {
        match self {
            UserRole::Admin => RoleTemplate {
                name: "سارا احمدی",
                avatar: "https://i.pravatar.cc/150?img=5",
                default_email: "admin@navalhub.ir",
            },
            UserRole::Technician => RoleTemplate {
                name: "مهدی رضوی",
                avatar: "https://i.pravatar.cc/150?img=15",
                default_email: "tech@navalhub.ir",
            },
            UserRole::Client => RoleTemplate {
                name: "لیلا جعفری",
                avatar: "https://i.pravatar.cc/150?img=32",
                default_email: "client@navalhub.ir",
            },
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Perfil montado no login. Imutável: um novo login substitui o perfil inteiro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    name: String,
    email: String,
    avatar: String,
    role: UserRole,
}

impl UserProfile {
    // Usa o e-mail informado ou, se vazio, o e-mail padrão do template.
    pub fn from_template(role: UserRole, email: &str) -> Self {
        let template = role.template();
        let email = if email.is_empty() { template.default_email } else { email };
        Self {
            name: template.name.to_string(),
            email: email.to_string(),
            avatar: template.avatar.to_string(),
            role,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    pub fn role(&self) -> UserRole {
        self.role
    }
}

/// Estado de autenticação. `Authenticated` sempre carrega o perfil,
/// então "autenticado sem usuário" não é representável.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(UserProfile),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Session::Authenticated(profile) => Some(profile),
            Session::Anonymous => None,
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user().map(UserProfile::role)
    }
}

// Dados do formulário de login
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}
