use crate::errors::ApiError;
use crate::http::ApiClient;
use crate::models::timeline::{
    ApplicationSubmittedLog, CreateCustomEventRequest, CreateTimelineEventRequest,
    InterviewScheduledLog, JobSavedLog, JobTimelineQuery, MilestonesQuery, StatusChangeLog,
    TimelineEvent, TimelineQuery, UpcomingQuery, UpdateTimelineEventRequest,
};
use crate::models::{push_opt, MessageResponse};

/// `/timeline` resource family: user/job/application-scoped event feeds plus
/// the "log X" convenience endpoints that carry their metadata in the query
/// string.
#[derive(Clone)]
pub struct TimelineService {
    client: ApiClient,
}

impl TimelineService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn user_timeline(
        &self,
        user_profile_id: &str,
        options: &TimelineQuery,
    ) -> Result<Vec<TimelineEvent>, ApiError> {
        self.client
            .get_query(
                &format!("/timeline/user/{user_profile_id}"),
                &options.to_query(),
            )
            .await
    }

    pub async fn user_milestones(
        &self,
        user_profile_id: &str,
        options: &MilestonesQuery,
    ) -> Result<Vec<TimelineEvent>, ApiError> {
        self.client
            .get_query(
                &format!("/timeline/user/{user_profile_id}/milestones"),
                &options.to_query(),
            )
            .await
    }

    pub async fn upcoming_events(
        &self,
        user_profile_id: &str,
        options: &UpcomingQuery,
    ) -> Result<Vec<TimelineEvent>, ApiError> {
        self.client
            .get_query(
                &format!("/timeline/user/{user_profile_id}/upcoming"),
                &options.to_query(),
            )
            .await
    }

    pub async fn job_timeline(
        &self,
        job_id: &str,
        options: &JobTimelineQuery,
    ) -> Result<Vec<TimelineEvent>, ApiError> {
        self.client
            .get_query(&format!("/timeline/job/{job_id}"), &options.to_query())
            .await
    }

    pub async fn application_timeline(
        &self,
        application_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<TimelineEvent>, ApiError> {
        let mut query = Vec::new();
        push_opt(&mut query, "limit", limit.as_ref());
        self.client
            .get_query(&format!("/timeline/application/{application_id}"), &query)
            .await
    }

    pub async fn create_event(
        &self,
        user_profile_id: &str,
        request: &CreateTimelineEventRequest,
    ) -> Result<TimelineEvent, ApiError> {
        self.client
            .post(&format!("/timeline/user/{user_profile_id}/event"), request)
            .await
    }

    pub async fn create_custom_event(
        &self,
        user_profile_id: &str,
        request: &CreateCustomEventRequest,
    ) -> Result<TimelineEvent, ApiError> {
        self.client
            .post(
                &format!("/timeline/user/{user_profile_id}/custom-event"),
                request,
            )
            .await
    }

    pub async fn update_event(
        &self,
        event_id: &str,
        request: &UpdateTimelineEventRequest,
    ) -> Result<TimelineEvent, ApiError> {
        self.client
            .put(&format!("/timeline/event/{event_id}"), request)
            .await
    }

    pub async fn delete_event(&self, event_id: &str) -> Result<MessageResponse, ApiError> {
        self.client
            .delete(&format!("/timeline/event/{event_id}"))
            .await
    }

    pub async fn log_job_saved(
        &self,
        user_profile_id: &str,
        job_id: &str,
        log: &JobSavedLog,
    ) -> Result<TimelineEvent, ApiError> {
        self.client
            .post_query(
                &format!("/timeline/user/{user_profile_id}/job/{job_id}/saved"),
                &log.to_query(),
            )
            .await
    }

    pub async fn log_application_submitted(
        &self,
        user_profile_id: &str,
        application_id: &str,
        log: &ApplicationSubmittedLog,
    ) -> Result<TimelineEvent, ApiError> {
        self.client
            .post_query(
                &format!("/timeline/user/{user_profile_id}/application/{application_id}/submitted"),
                &log.to_query(),
            )
            .await
    }

    pub async fn log_interview_scheduled(
        &self,
        user_profile_id: &str,
        application_id: &str,
        log: &InterviewScheduledLog,
    ) -> Result<TimelineEvent, ApiError> {
        self.client
            .post_query(
                &format!(
                    "/timeline/user/{user_profile_id}/application/{application_id}/interview-scheduled"
                ),
                &log.to_query(),
            )
            .await
    }

    pub async fn log_status_change(
        &self,
        user_profile_id: &str,
        application_id: &str,
        log: &StatusChangeLog,
    ) -> Result<TimelineEvent, ApiError> {
        self.client
            .post_query(
                &format!(
                    "/timeline/user/{user_profile_id}/application/{application_id}/status-changed"
                ),
                &log.to_query(),
            )
            .await
    }
}
