use crate::error::HuddleError;
use crate::notification::schedule::LinkBuilder;
use crate::occurrence::assignment::create_join_records;
use crate::shared::audience::resolve_audience;
use crate::shared::usecase::UseCase;
use huddle_domain::{
    expand_template, Occurrence, TemplateValidationError, WallClockError, ID,
};
use huddle_infra::HuddleContext;

/// Publishes a draft template: validates it, expands it into dated
/// occurrences, resolves the audience snapshot, creates the join records
/// and schedules the reminders, then flips the template to published.
///
/// The whole pipeline runs synchronously inside this use case; for a large
/// audience over a long date range the publish request is simply
/// long-running. The draft flag is a one-way gate: publishing twice is
/// rejected rather than re-expanded.
#[derive(Debug)]
pub struct PublishTemplateUseCase {
    pub template_id: ID,
    pub link_builder: LinkBuilder,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    AlreadyPublished(ID),
    InvalidTemplate(TemplateValidationError),
    UnrepresentableTime(WallClockError),
    StorageError,
}

impl From<UseCaseErrors> for HuddleError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::NotFound(id) => {
                Self::NotFound(format!("The template with id: {}, was not found.", id))
            }
            UseCaseErrors::AlreadyPublished(id) => Self::Conflict(format!(
                "The template with id: {}, is already published.",
                id
            )),
            UseCaseErrors::InvalidTemplate(e) => Self::BadClientData(e.to_string()),
            UseCaseErrors::UnrepresentableTime(e) => Self::BadClientData(e.to_string()),
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for PublishTemplateUseCase {
    type Response = Vec<Occurrence>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &HuddleContext) -> Result<Self::Response, Self::Errors> {
        let mut template = ctx
            .repos
            .templates
            .find(&self.template_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.template_id.clone()))?;
        if !template.is_draft {
            return Err(UseCaseErrors::AlreadyPublished(template.id));
        }
        // Validation happens before any state is created
        template
            .validate()
            .map_err(UseCaseErrors::InvalidTemplate)?;
        let occurrences =
            expand_template(&template).map_err(UseCaseErrors::UnrepresentableTime)?;

        // The audience snapshot is taken once per publish and shared by
        // every occurrence of this template
        let audience = resolve_audience(&template.audience, ctx).await;

        for occurrence in &occurrences {
            ctx.repos
                .occurrences
                .insert(occurrence)
                .await
                .map_err(|_| UseCaseErrors::StorageError)?;
            create_join_records(occurrence, &audience, self.link_builder, ctx)
                .await
                .map_err(|_| UseCaseErrors::StorageError)?;
        }

        template.is_draft = false;
        ctx.repos
            .templates
            .save(&template)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(occurrences)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::usecase::execute;
    use crate::test_helpers::{draft_template, noop_link, setup_test_context};
    use chrono::NaiveDate;
    use huddle_domain::{AudienceSpec, Role, User};

    #[tokio::test]
    async fn publish_expands_assigns_and_flips_the_draft_flag() {
        let ctx = setup_test_context().ctx;
        let role = Role::new("everyone");
        ctx.repos.roles.insert(&role).await.unwrap();
        let mut member = User::new("member@team.test");
        member.roles.push(role.id.clone());
        ctx.repos.users.insert(&member).await.unwrap();

        // Monday through Sunday, three days a week
        let mut template = draft_template(
            NaiveDate::from_ymd(2021, 9, 6),
            NaiveDate::from_ymd(2021, 9, 12),
            vec![0, 2, 4],
        );
        template.audience = AudienceSpec {
            users: Vec::new(),
            roles: vec![role.id.clone()],
        };
        ctx.repos.templates.insert(&template).await.unwrap();

        let occurrences = execute(
            PublishTemplateUseCase {
                template_id: template.id.clone(),
                link_builder: noop_link,
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(occurrences.len(), 3);

        let stored = ctx.repos.templates.find(&template.id).await.unwrap();
        assert!(!stored.is_draft);
        for occurrence in &occurrences {
            let join_records = ctx
                .repos
                .join_records
                .find_by_occurrence(&occurrence.id)
                .await;
            assert_eq!(join_records.len(), 1);
            assert_eq!(join_records[0].user_id, member.id);
        }
        // One open task per occurrence landed on the member
        let member = ctx.repos.users.find(&member.id).await.unwrap();
        assert_eq!(member.assigned_tasks.len(), 3);
    }

    #[tokio::test]
    async fn a_second_publish_is_rejected_not_re_expanded() {
        let ctx = setup_test_context().ctx;
        let template = draft_template(
            NaiveDate::from_ymd(2021, 9, 6),
            NaiveDate::from_ymd(2021, 9, 12),
            vec![0],
        );
        ctx.repos.templates.insert(&template).await.unwrap();

        let publish = || PublishTemplateUseCase {
            template_id: template.id.clone(),
            link_builder: noop_link,
        };
        assert!(execute(publish(), &ctx).await.is_ok());
        match execute(publish(), &ctx).await {
            Err(UseCaseErrors::AlreadyPublished(_)) => {}
            _ => panic!("Expected AlreadyPublished"),
        }
        // No second batch of occurrences was created
        assert_eq!(
            ctx.repos
                .occurrences
                .find_by_template(&template.id)
                .await
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn an_invalid_template_creates_no_partial_state() {
        let ctx = setup_test_context().ctx;
        let mut template = draft_template(
            NaiveDate::from_ymd(2021, 9, 6),
            NaiveDate::from_ymd(2021, 9, 12),
            vec![0],
        );
        template.days_of_week = Vec::new();
        ctx.repos.templates.insert(&template).await.unwrap();

        let res = execute(
            PublishTemplateUseCase {
                template_id: template.id.clone(),
                link_builder: noop_link,
            },
            &ctx,
        )
        .await;
        assert!(matches!(res, Err(UseCaseErrors::InvalidTemplate(_))));
        assert!(ctx
            .repos
            .occurrences
            .find_by_template(&template.id)
            .await
            .is_empty());
        let stored = ctx.repos.templates.find(&template.id).await.unwrap();
        assert!(stored.is_draft);
    }

    #[tokio::test]
    async fn a_narrow_range_may_publish_with_zero_occurrences() {
        let ctx = setup_test_context().ctx;
        // Monday and Tuesday only, template occurs on Sundays
        let template = draft_template(
            NaiveDate::from_ymd(2021, 9, 6),
            NaiveDate::from_ymd(2021, 9, 7),
            vec![6],
        );
        ctx.repos.templates.insert(&template).await.unwrap();

        let occurrences = execute(
            PublishTemplateUseCase {
                template_id: template.id.clone(),
                link_builder: noop_link,
            },
            &ctx,
        )
        .await
        .unwrap();
        assert!(occurrences.is_empty());
        let stored = ctx.repos.templates.find(&template.id).await.unwrap();
        assert!(!stored.is_draft);
    }
}
