// src/middleware/route_guard.rs

use std::collections::BTreeMap;

use crate::models::auth::{Session, UserRole};

pub const LOGIN_PATH: &str = "/login";

/// Página inicial de um papel. Sem papel, cai no painel executivo.
pub fn home_path_for(role: Option<UserRole>) -> &'static str {
    role.map_or(UserRole::Admin.home_path(), UserRole::home_path)
}

// Quem pode abrir uma rota
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    // Só para visitantes (login); autenticados são mandados para casa
    Public,
    // Qualquer papel autenticado
    Authenticated,
    // Apenas os papéis listados
    Roles(&'static [UserRole]),
    // Não renderiza nada: redireciona para a casa do papel atual
    RoleHome,
}

#[derive(Debug, Clone, Copy)]
pub struct RouteDef {
    pub pattern: &'static str,
    pub access: RouteAccess,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub pattern: &'static str,
    pub params: BTreeMap<&'static str, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render(RouteMatch),
    Redirect(&'static str),
    NotFound,
}

const ADMIN_ONLY: &[UserRole] = &[UserRole::Admin];
const TECHNICIAN_ONLY: &[UserRole] = &[UserRole::Technician];
const CLIENT_ONLY: &[UserRole] = &[UserRole::Client];
const ALL_ROLES: &[UserRole] = &UserRole::ALL;

// A tabela de rotas do painel
pub const ROUTES: &[RouteDef] = &[
    RouteDef { pattern: "/login", access: RouteAccess::Public },
    RouteDef { pattern: "/dashboard", access: RouteAccess::Roles(ADMIN_ONLY) },
    RouteDef { pattern: "/dashboard/technician", access: RouteAccess::Roles(TECHNICIAN_ONLY) },
    RouteDef { pattern: "/dashboard/client", access: RouteAccess::Roles(CLIENT_ONLY) },
    RouteDef { pattern: "/projects", access: RouteAccess::Roles(ADMIN_ONLY) },
    RouteDef { pattern: "/projects/:id", access: RouteAccess::Roles(ADMIN_ONLY) },
    RouteDef { pattern: "/calendar", access: RouteAccess::Roles(ADMIN_ONLY) },
    RouteDef { pattern: "/audit-logs", access: RouteAccess::Roles(ADMIN_ONLY) },
    RouteDef { pattern: "/security-logs", access: RouteAccess::Roles(ADMIN_ONLY) },
    RouteDef { pattern: "/settings/profile", access: RouteAccess::Roles(ALL_ROLES) },
    RouteDef { pattern: "/settings/security", access: RouteAccess::Roles(ALL_ROLES) },
    RouteDef { pattern: "/", access: RouteAccess::RoleHome },
];

// Remove query string, fragmento e barras finais ("/projects/7/?a=1" -> "/projects/7")
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

fn match_pattern(pattern: &'static str, path: &str) -> Option<RouteMatch> {
    let mut params = BTreeMap::new();
    let mut pattern_segments = pattern.split('/');
    let mut path_segments = path.split('/');

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(RouteMatch { pattern, params }),
            (Some(expected), Some(actual)) => {
                if let Some(name) = expected.strip_prefix(':') {
                    if actual.is_empty() {
                        return None;
                    }
                    params.insert(name, actual.to_string());
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

/// Decisão pura: dado a sessão e a regra da rota, renderiza ou redireciona.
pub fn decide(session: &Session, access: RouteAccess, route: RouteMatch) -> GuardDecision {
    let role = session.role();

    match (access, session.user()) {
        (RouteAccess::RoleHome, _) => GuardDecision::Redirect(home_path_for(role)),
        (RouteAccess::Public, Some(_)) => GuardDecision::Redirect(home_path_for(role)),
        (RouteAccess::Public, None) => GuardDecision::Render(route),
        (_, None) => GuardDecision::Redirect(LOGIN_PATH),
        (RouteAccess::Roles(allowed), Some(user)) if !allowed.contains(&user.role()) => {
            GuardDecision::Redirect(home_path_for(role))
        }
        _ => GuardDecision::Render(route),
    }
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    routes: &'static [RouteDef],
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self { routes: ROUTES }
    }
}

impl RouteGuard {
    pub fn new(routes: &'static [RouteDef]) -> Self {
        Self { routes }
    }

    pub fn resolve(&self, session: &Session, path: &str) -> GuardDecision {
        let path = normalize(path);

        let found = self
            .routes
            .iter()
            .find_map(|def| match_pattern(def.pattern, path).map(|m| (def.access, m)));

        match found {
            Some((access, route)) => decide(session, access, route),
            None => {
                tracing::debug!("Rota desconhecida: {}", path);
                GuardDecision::NotFound
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::UserProfile;

    const PROTECTED: [&str; 10] = [
        "/dashboard",
        "/dashboard/technician",
        "/dashboard/client",
        "/projects",
        "/projects/42",
        "/calendar",
        "/audit-logs",
        "/security-logs",
        "/settings/profile",
        "/settings/security",
    ];

    fn signed_in(role: UserRole) -> Session {
        Session::Authenticated(UserProfile::from_template(role, ""))
    }

    fn rendered(decision: &GuardDecision) -> Option<&'static str> {
        match decision {
            GuardDecision::Render(m) => Some(m.pattern),
            _ => None,
        }
    }

    #[test]
    fn home_path_is_total_and_defaults_to_admin() {
        for role in UserRole::ALL {
            assert_eq!(home_path_for(Some(role)), role.home_path());
        }
        assert_eq!(home_path_for(None), "/dashboard");
    }

    #[test]
    fn anonymous_is_sent_to_login_from_every_protected_path() {
        let guard = RouteGuard::default();
        for path in PROTECTED {
            assert_eq!(
                guard.resolve(&Session::Anonymous, path),
                GuardDecision::Redirect(LOGIN_PATH),
                "{path}"
            );
        }
    }

    #[test]
    fn login_renders_for_anonymous_and_redirects_home_when_signed_in() {
        let guard = RouteGuard::default();
        assert_eq!(rendered(&guard.resolve(&Session::Anonymous, "/login")), Some("/login"));
        assert_eq!(
            guard.resolve(&signed_in(UserRole::Client), "/login"),
            GuardDecision::Redirect("/dashboard/client")
        );
    }

    #[test]
    fn wrong_role_goes_to_its_own_home() {
        let guard = RouteGuard::default();
        let tech = signed_in(UserRole::Technician);

        for path in ["/dashboard", "/projects", "/projects/7", "/calendar", "/audit-logs", "/dashboard/client"] {
            assert_eq!(guard.resolve(&tech, path), GuardDecision::Redirect("/dashboard/technician"), "{path}");
        }
        assert_eq!(
            guard.resolve(&signed_in(UserRole::Client), "/security-logs"),
            GuardDecision::Redirect("/dashboard/client")
        );
    }

    #[test]
    fn allowed_roles_render() {
        let guard = RouteGuard::default();
        assert_eq!(rendered(&guard.resolve(&signed_in(UserRole::Admin), "/audit-logs")), Some("/audit-logs"));
        for role in UserRole::ALL {
            assert_eq!(
                rendered(&guard.resolve(&signed_in(role), "/settings/security")),
                Some("/settings/security")
            );
            assert_eq!(rendered(&guard.resolve(&signed_in(role), role.home_path())), Some(role.home_path()));
        }
    }

    #[test]
    fn authenticated_access_without_role_list_admits_everyone() {
        const OPEN: &[RouteDef] = &[RouteDef { pattern: "/inbox", access: RouteAccess::Authenticated }];
        let guard = RouteGuard::new(OPEN);

        assert_eq!(guard.resolve(&Session::Anonymous, "/inbox"), GuardDecision::Redirect(LOGIN_PATH));
        for role in UserRole::ALL {
            assert_eq!(rendered(&guard.resolve(&signed_in(role), "/inbox")), Some("/inbox"));
        }
    }

    #[test]
    fn root_redirects_to_role_home() {
        let guard = RouteGuard::default();
        assert_eq!(
            guard.resolve(&signed_in(UserRole::Technician), "/"),
            GuardDecision::Redirect("/dashboard/technician")
        );
        assert_eq!(guard.resolve(&Session::Anonymous, "/"), GuardDecision::Redirect("/dashboard"));
    }

    #[test]
    fn project_detail_captures_id_and_ignores_query() {
        let guard = RouteGuard::default();
        match guard.resolve(&signed_in(UserRole::Admin), "/projects/UTN-2045/?tab=docs") {
            GuardDecision::Render(m) => {
                assert_eq!(m.pattern, "/projects/:id");
                assert_eq!(m.params.get("id").map(String::as_str), Some("UTN-2045"));
            }
            other => panic!("esperava Render, veio {other:?}"),
        }
    }

    #[test]
    fn unknown_paths_are_not_found() {
        let guard = RouteGuard::default();
        assert_eq!(guard.resolve(&signed_in(UserRole::Admin), "/reports"), GuardDecision::NotFound);
        assert_eq!(guard.resolve(&signed_in(UserRole::Admin), "/projects/1/files"), GuardDecision::NotFound);
    }
}
