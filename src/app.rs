use crate::api::{HttpPredictionApi, PredictionApi};
use crate::busy::BusyFlag;
use crate::components::panel_tabs;
use crate::config::{self, AppConfig};
use crate::error::PanelError;
use crate::message::Message;
use crate::model::{DropZone, FormKind, NavigationController, PanelChange, PanelName, SelectedFile};
use crate::panel::{DiseaseKind, RecommendationKind, RequestPanel, YieldKind};
use crate::render::ResultView;
use crate::views::{form_panel, home_panel, result_panel, upload_panel};
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, row, scrollable, stack, text};
use iced::{application, event, window, Alignment, Element, Event, Length, Subscription, Task, Theme};
use rfd::AsyncFileDialog;
use std::path::Path;
use std::sync::Arc;

const APP_TITLE: &str = "CropDesk";
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    let config = config::load();
    log::info!("Using prediction service at {}", config.api.base_url);

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .subscription(App::subscription)
        .run_with(move || (App::new(config), Task::none()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub context: &'static str,
    pub error: PanelError,
}

impl Notification {
    pub fn text(&self) -> String {
        match &self.error {
            PanelError::Application(message) => format!("Error {}: {message}", self.context),
            other => format!("Error: {other}"),
        }
    }
}

pub struct App {
    api: Arc<dyn PredictionApi>,
    busy: BusyFlag,
    navigation: NavigationController,
    yield_panel: RequestPanel<YieldKind>,
    disease_panel: RequestPanel<DiseaseKind>,
    recommendation_panel: RequestPanel<RecommendationKind>,
    drop_zone: DropZone,
    notification: Option<Notification>,
    dark_theme: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let api: Arc<dyn PredictionApi> = Arc::new(HttpPredictionApi::new(&config.api));
        Self::with_api(api, &config)
    }

    pub fn with_api(api: Arc<dyn PredictionApi>, config: &AppConfig) -> Self {
        let mut navigation = NavigationController::new(&PanelName::ALL);
        if navigation.select(&config.ui.start_panel).is_none() {
            log::warn!(
                "Unknown start panel {:?}; no panel selected",
                config.ui.start_panel
            );
        }

        Self {
            api,
            busy: BusyFlag::new(),
            navigation,
            yield_panel: RequestPanel::default(),
            disease_panel: RequestPanel::default(),
            recommendation_panel: RequestPanel::default(),
            drop_zone: DropZone::Idle,
            notification: None,
            dark_theme: config.ui.dark_theme,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectPanel(panel) => {
                if let Some(change) = self.navigation.select_panel(panel) {
                    self.publish_panel_change(&change);
                }
                Task::none()
            }
            Message::FieldChanged(FormKind::Yield, index, value) => {
                self.yield_panel.input.0.set(index, value);
                Task::none()
            }
            Message::FieldChanged(FormKind::Recommendation, index, value) => {
                self.recommendation_panel.input.0.set(index, value);
                Task::none()
            }
            Message::SubmitYield => {
                match self.yield_panel.submit(Arc::clone(&self.api), &self.busy) {
                    Ok(request) => {
                        self.notification = None;
                        Task::perform(request, Message::YieldCompleted)
                    }
                    Err(err) => self.notify("predicting yield", err),
                }
            }
            Message::AnalyzeImage => {
                match self.disease_panel.submit(Arc::clone(&self.api), &self.busy) {
                    Ok(request) => {
                        self.notification = None;
                        Task::perform(request, Message::DiseaseCompleted)
                    }
                    Err(err) => self.notify("detecting disease", err),
                }
            }
            Message::SubmitRecommendations => {
                match self
                    .recommendation_panel
                    .submit(Arc::clone(&self.api), &self.busy)
                {
                    Ok(request) => {
                        self.notification = None;
                        Task::perform(request, Message::RecommendationsCompleted)
                    }
                    Err(err) => self.notify("getting recommendations", err),
                }
            }
            Message::YieldCompleted(outcome) => match self.yield_panel.on_result(outcome) {
                Ok(()) => Task::none(),
                Err(err) => self.notify("predicting yield", err),
            },
            Message::DiseaseCompleted(outcome) => match self.disease_panel.on_result(outcome) {
                Ok(()) => Task::none(),
                Err(err) => self.notify("detecting disease", err),
            },
            Message::RecommendationsCompleted(outcome) => {
                match self.recommendation_panel.on_result(outcome) {
                    Ok(()) => Task::none(),
                    Err(err) => self.notify("getting recommendations", err),
                }
            }
            Message::PickImage => Task::perform(
                async {
                    match AsyncFileDialog::new()
                        .add_filter("Images", &IMAGE_EXTENSIONS)
                        .pick_file()
                        .await
                    {
                        Some(handle) => {
                            let bytes = handle.read().await;
                            Some(Ok(SelectedFile::new(handle.file_name(), bytes)))
                        }
                        None => None,
                    }
                },
                Message::ImageSelected,
            ),
            Message::FileHovered => {
                if self.navigation.is_active(PanelName::Disease) {
                    self.drop_zone = DropZone::Hovering;
                }
                Task::none()
            }
            Message::FileHoverLeft => {
                self.drop_zone = DropZone::Idle;
                Task::none()
            }
            Message::FileDropped(path) => {
                if !self.accept_drop(&path) {
                    return Task::none();
                }
                Task::perform(
                    async move { Some(SelectedFile::read(&path)) },
                    Message::ImageSelected,
                )
            }
            Message::ImageSelected(None) => Task::none(),
            Message::ImageSelected(Some(selected)) => {
                match selected.and_then(|file| self.disease_panel.input.attach(file)) {
                    Ok(()) => Task::none(),
                    Err(err) => self.notify("loading image", err),
                }
            }
            Message::DismissNotification => {
                self.notification = None;
                Task::none()
            }
        }
    }

    // Only the first file of a hovered drop onto the Disease panel is taken.
    fn accept_drop(&mut self, path: &Path) -> bool {
        let accept = self.navigation.is_active(PanelName::Disease)
            && self.drop_zone == DropZone::Hovering;
        self.drop_zone = DropZone::Idle;
        if !accept {
            log::info!("Ignoring dropped file {}", path.display());
        }
        accept
    }

    fn publish_panel_change(&mut self, change: &PanelChange) {
        self.yield_panel.on_panel_changed(change);
        self.disease_panel.on_panel_changed(change);
        self.recommendation_panel.on_panel_changed(change);
    }

    fn notify(&mut self, context: &'static str, error: PanelError) -> Task<Message> {
        self.notification = Some(Notification { context, error });
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = column![text(APP_TITLE).size(28), panel_tabs(&self.navigation)].spacing(12);

        let body: Element<'_, Message> = match self.navigation.active() {
            None => text("Choose a section above to get started").into(),
            Some(PanelName::Home) => home_panel(),
            Some(PanelName::Yield) => self.feature_view(
                "Crop Yield Prediction",
                form_panel(
                    &self.yield_panel.input.0,
                    FormKind::Yield,
                    "Predict Yield",
                    Message::SubmitYield,
                )
                .into(),
                self.yield_panel.result(),
            ),
            Some(PanelName::Disease) => self.feature_view(
                "Plant Disease Detection",
                upload_panel(&self.disease_panel.input, self.drop_zone),
                self.disease_panel.result(),
            ),
            Some(PanelName::Recommendations) => self.feature_view(
                "Crop Recommendations",
                form_panel(
                    &self.recommendation_panel.input.0,
                    FormKind::Recommendation,
                    "Get Recommendations",
                    Message::SubmitRecommendations,
                )
                .into(),
                self.recommendation_panel.result(),
            ),
        };

        let mut content = column![header].spacing(20).padding(20);

        if let Some(notification) = &self.notification {
            content = content.push(
                container(
                    row![
                        text(notification.text())
                            .wrapping(Wrapping::Word)
                            .width(Length::Fill),
                        button("Dismiss").on_press(Message::DismissNotification),
                    ]
                    .spacing(12)
                    .align_y(Alignment::Center),
                )
                .padding(12)
                .width(Length::Fill)
                .style(container::bordered_box),
            );
        }

        let page = content.push(scrollable(body).height(Length::Fill));

        if self.busy.is_busy() {
            stack![page, loading_overlay()].into()
        } else {
            page.into()
        }
    }

    fn feature_view<'a>(
        &'a self,
        title: &'a str,
        input: Element<'a, Message>,
        result: Option<&'a ResultView>,
    ) -> Element<'a, Message> {
        let mut section = column![text(title).size(22), input].spacing(16);
        if let Some(view) = result {
            section = section.push(result_panel(view));
        }
        section.width(Length::Fill).into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FileHoverLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    pub fn theme(&self) -> Theme {
        if self.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn loading_overlay() -> Element<'static, Message> {
    container(
        container(text("Working...").size(20))
            .padding(24)
            .style(container::rounded_box),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .into()
}
