pub mod kinds;

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::api::{parse_outcome, Endpoint, Payload, PredictionApi};
use crate::busy::BusyFlag;
use crate::error::PanelError;
use crate::model::{PanelChange, PanelName};
use crate::render::ResultView;

pub use kinds::{DiseaseKind, RecommendationKind, YieldKind};

pub trait PanelKind {
    const PANEL: PanelName;
    const ENDPOINT: Endpoint;

    type Input: Default;
    type Output: DeserializeOwned + Send + 'static;

    fn collect_payload(input: &Self::Input) -> Result<Payload, PanelError>;

    fn render(output: &Self::Output) -> ResultView;

    // Returns whether the result area should be hidden too.
    fn reset_on_leave(_input: &mut Self::Input) -> bool {
        false
    }
}

pub struct RequestPanel<K: PanelKind> {
    pub input: K::Input,
    result: Option<ResultView>,
}

impl<K: PanelKind> Default for RequestPanel<K> {
    fn default() -> Self {
        Self::new(K::Input::default())
    }
}

impl<K: PanelKind> RequestPanel<K> {
    pub fn new(input: K::Input) -> Self {
        Self {
            input,
            result: None,
        }
    }

    pub fn result(&self) -> Option<&ResultView> {
        self.result.as_ref()
    }

    /// Validation failures return before anything is sent. Otherwise the busy
    /// flag stays raised until the returned future completes or is dropped.
    pub fn submit(
        &self,
        api: Arc<dyn PredictionApi>,
        busy: &BusyFlag,
    ) -> Result<impl Future<Output = Result<K::Output, PanelError>> + Send + 'static, PanelError>
    where
        K: 'static,
    {
        let payload = K::collect_payload(&self.input)?;
        let guard = busy.raise();
        log::info!("Submitting {} request to {}", K::PANEL, K::ENDPOINT.path());

        Ok(async move {
            let _guard = guard;
            let path = K::ENDPOINT.path();
            let body = match &payload {
                Payload::Form(fields) => api.post_json(path, fields).await?,
                Payload::Image(image) => api.post_image(path, image).await?,
            };
            parse_outcome::<K::Output>(&body)
        })
    }

    pub fn on_result(&mut self, outcome: Result<K::Output, PanelError>) -> Result<(), PanelError> {
        match outcome {
            Ok(output) => {
                let view = K::render(&output);
                log::debug!("{} result:\n{}", K::PANEL, view.to_plain_text());
                self.result = Some(view);
                Ok(())
            }
            Err(PanelError::Transport { detail }) => {
                log::warn!("{} request failed (transport): {detail}", K::PANEL);
                Err(PanelError::Transport { detail })
            }
            Err(err) => {
                log::warn!("{} request failed ({}): {err}", K::PANEL, err.kind());
                Err(err)
            }
        }
    }

    pub fn on_panel_changed(&mut self, change: &PanelChange) {
        if change.current != K::PANEL && K::reset_on_leave(&mut self.input) {
            self.result = None;
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::{Map, Value};

    use crate::api::{ImageUpload, PredictionApi};
    use crate::busy::BusyFlag;
    use crate::error::PanelError;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Recorded {
        Json(String, Map<String, Value>),
        Image(String, ImageUpload),
    }

    pub struct FakeApi {
        reply: Result<String, PanelError>,
        busy: Option<BusyFlag>,
        pub calls: Mutex<Vec<Recorded>>,
        pub busy_during_call: Mutex<Vec<bool>>,
    }

    impl FakeApi {
        pub fn replying(body: &str) -> Self {
            Self::with_reply(Ok(body.to_string()))
        }

        pub fn failing(detail: &str) -> Self {
            Self::with_reply(Err(PanelError::transport(detail)))
        }

        fn with_reply(reply: Result<String, PanelError>) -> Self {
            Self {
                reply,
                busy: None,
                calls: Mutex::new(Vec::new()),
                busy_during_call: Mutex::new(Vec::new()),
            }
        }

        pub fn watching(mut self, busy: &BusyFlag) -> Self {
            self.busy = Some(busy.clone());
            self
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn record(&self, call: Recorded) -> Result<String, PanelError> {
            if let Some(busy) = &self.busy {
                self.busy_during_call.lock().unwrap().push(busy.is_busy());
            }
            self.calls.lock().unwrap().push(call);
            self.reply.clone()
        }
    }

    #[async_trait]
    impl PredictionApi for FakeApi {
        async fn post_json(
            &self,
            path: &str,
            body: &Map<String, Value>,
        ) -> Result<String, PanelError> {
            self.record(Recorded::Json(path.to_string(), body.clone()))
        }

        async fn post_image(&self, path: &str, image: &ImageUpload) -> Result<String, PanelError> {
            self.record(Recorded::Image(path.to_string(), image.clone()))
        }
    }
}
