use huddle_domain::{AudienceSpec, User};
use huddle_infra::HuddleContext;
use itertools::Itertools;

/// Materializes an audience specification into the concrete set of users:
/// the explicitly listed users unioned with every member of the listed
/// roles, deduplicated by user id. This runs at publish time and the result
/// is a snapshot; later role membership changes never touch published items.
pub async fn resolve_audience(spec: &AudienceSpec, ctx: &HuddleContext) -> Vec<User> {
    let mut users = ctx.repos.users.find_many(&spec.users).await;
    for role_id in &spec.roles {
        users.extend(ctx.repos.users.find_by_role(role_id).await);
    }
    users
        .into_iter()
        .unique_by(|u| u.id.clone())
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_helpers::setup_test_context;
    use huddle_domain::{Role, User};

    #[tokio::test]
    async fn unions_explicit_users_and_role_members_without_duplicates() {
        let ctx = setup_test_context().ctx;
        let role_x = Role::new("mechanical");
        ctx.repos.roles.insert(&role_x).await.unwrap();

        // user_a is listed explicitly and also holds the role
        let mut user_a = User::new("a@team.test");
        user_a.roles.push(role_x.id.clone());
        let mut user_b = User::new("b@team.test");
        user_b.roles.push(role_x.id.clone());
        let mut user_c = User::new("c@team.test");
        user_c.roles.push(role_x.id.clone());
        let bystander = User::new("d@team.test");
        for user in vec![&user_a, &user_b, &user_c, &bystander] {
            ctx.repos.users.insert(user).await.unwrap();
        }

        let spec = AudienceSpec {
            users: vec![user_a.id.clone()],
            roles: vec![role_x.id.clone()],
        };
        let resolved = resolve_audience(&spec, &ctx).await;
        assert_eq!(resolved.len(), 3);
        let ids: Vec<_> = resolved.iter().map(|u| u.id.clone()).collect();
        assert!(ids.contains(&user_a.id));
        assert!(ids.contains(&user_b.id));
        assert!(ids.contains(&user_c.id));
        assert!(!ids.contains(&bystander.id));
    }
}
