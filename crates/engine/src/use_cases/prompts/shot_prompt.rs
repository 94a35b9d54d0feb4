//! Shot prompt construction.
//!
//! The consumer of transformation resolution: assembles a shot's scene,
//! action, and per-asset effective state into the structured context the
//! LLM layer rewrites, and into a concrete generation instruction packet
//! for the image layer. Overrides replace baseline descriptions; assets
//! with no override use baseline unchanged.

use std::collections::HashMap;
use std::sync::Arc;

use frameloom_domain::{AssetInstanceId, GenerationRequest, ResolvedOverride, SceneId, ShotId};

use crate::infrastructure::ports::{
    ClockPort, LlmRequest, RepoError, SceneAssetRepo, SceneRepo, ShotRepo,
    TransformationEventRepo,
};
use crate::llm_context::{
    AssetPromptContext, ScenePromptContext, ShotPromptContext, ShotPromptRequest,
};
use crate::prompt_templates::{keys, PromptTemplates};
use crate::use_cases::transformation::resolve_overrides;

/// Default frame dimensions handed to the image layer.
pub const DEFAULT_FRAME_WIDTH: u32 = 1920;
pub const DEFAULT_FRAME_HEIGHT: u32 = 1080;

/// Everything prompt construction produces for one shot.
#[derive(Debug, Clone)]
pub struct ShotPromptOutput {
    /// Structured context for the LLM prompt-rewriting layer
    pub context: ShotPromptRequest,
    /// Ready-to-submit generation instruction packet
    pub generation: GenerationRequest,
}

/// Use case: build the generation prompt and LLM context for one shot.
pub struct BuildShotPrompt {
    scenes: Arc<dyn SceneRepo>,
    shots: Arc<dyn ShotRepo>,
    scene_assets: Arc<dyn SceneAssetRepo>,
    events: Arc<dyn TransformationEventRepo>,
    clock: Arc<dyn ClockPort>,
    templates: PromptTemplates,
}

impl BuildShotPrompt {
    pub fn new(
        scenes: Arc<dyn SceneRepo>,
        shots: Arc<dyn ShotRepo>,
        scene_assets: Arc<dyn SceneAssetRepo>,
        events: Arc<dyn TransformationEventRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            scenes,
            shots,
            scene_assets,
            events,
            clock,
            templates: PromptTemplates::new(),
        }
    }

    pub async fn execute(
        &self,
        scene_id: SceneId,
        shot_id: ShotId,
    ) -> Result<ShotPromptOutput, RepoError> {
        let scene = self
            .scenes
            .get(scene_id)
            .await?
            .ok_or_else(|| RepoError::not_found("Scene", scene_id))?;

        let all_shots = self.shots.list_for_scene(scene_id).await?;
        let target_shot = all_shots
            .iter()
            .find(|shot| shot.id() == shot_id)
            .cloned()
            .ok_or_else(|| RepoError::not_found("Shot", shot_id))?;

        let scene_assets = self.scene_assets.list_for_scene(scene_id).await?;
        let events = self.events.list_for_scene(scene_id).await?;

        let overrides = resolve_overrides(&target_shot, &scene_assets, &events, &all_shots);
        let by_instance: HashMap<AssetInstanceId, &ResolvedOverride> = overrides
            .iter()
            .map(|resolved| (resolved.asset_instance_id, resolved))
            .collect();

        let assets: Vec<AssetPromptContext> = scene_assets
            .iter()
            .map(|asset| match by_instance.get(&asset.instance_id()) {
                Some(resolved) => AssetPromptContext::with_override(asset, resolved),
                None => AssetPromptContext::from_baseline(asset),
            })
            .collect();

        let context = ShotPromptRequest {
            scene: ScenePromptContext::from_scene(&scene),
            shot: ShotPromptContext::from_shot(&target_shot),
            assets,
            requested_at: self.clock.now(),
        };

        let generation = self.render_generation(&context);
        Ok(ShotPromptOutput {
            context,
            generation,
        })
    }

    /// Package a built context as an outbound LLM request for prompt
    /// rewriting. The call itself happens behind `LlmPort`, elsewhere.
    pub fn narration_request(&self, context: &ShotPromptRequest) -> Result<LlmRequest, RepoError> {
        context
            .to_llm_request(self.templates.get(keys::NARRATION_SYSTEM_PROMPT))
            .map_err(|err| RepoError::serialization(err.to_string()))
    }

    fn render_generation(&self, context: &ShotPromptRequest) -> GenerationRequest {
        let asset_line_template = self.templates.get(keys::FRAME_ASSET_LINE);
        let transforming_template = self.templates.get(keys::FRAME_TRANSFORMING_LINE);

        let mut asset_lines = Vec::new();
        for asset in &context.assets {
            asset_lines.push(PromptTemplates::render(
                &asset_line_template,
                &[("name", &asset.name), ("description", &asset.description)],
            ));
            if asset.is_transforming {
                asset_lines.push(PromptTemplates::render(
                    &transforming_template,
                    &[
                        ("name", &asset.name),
                        (
                            "narrative",
                            asset
                                .transformation_narrative
                                .as_deref()
                                .unwrap_or("its appearance is shifting"),
                        ),
                        (
                            "upcoming",
                            asset.upcoming_description.as_deref().unwrap_or("unknown"),
                        ),
                    ],
                ));
            }
        }

        let prompt = PromptTemplates::render(
            &self.templates.get(keys::FRAME_BASE),
            &[
                (
                    "visual_style",
                    context.scene.visual_style.as_deref().unwrap_or("cinematic"),
                ),
                ("scene_title", &context.scene.title),
                ("shot_action", context.shot.action.as_deref().unwrap_or("")),
                ("asset_lines", &asset_lines.join("\n")),
            ],
        );

        GenerationRequest::new(prompt, DEFAULT_FRAME_WIDTH, DEFAULT_FRAME_HEIGHT)
            .with_negative_prompt(self.templates.get(keys::FRAME_NEGATIVE))
            .with_reference_images(Self::collect_reference_images(context))
    }

    /// Effective reference images for every asset, then staged post images
    /// for transforming assets, deduplicated in order.
    fn collect_reference_images(context: &ShotPromptRequest) -> Vec<String> {
        let mut references = Vec::new();
        let push_unique = |image: Option<&str>, references: &mut Vec<String>| {
            if let Some(image) = image {
                if !references.iter().any(|existing| existing == image) {
                    references.push(image.to_string());
                }
            }
        };
        for asset in &context.assets {
            push_unique(asset.image_reference.as_deref(), &mut references);
        }
        for asset in &context.assets {
            push_unique(asset.upcoming_image_reference.as_deref(), &mut references);
        }
        references
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        MockClockPort, MockSceneAssetRepo, MockSceneRepo, MockShotRepo,
        MockTransformationEventRepo,
    };
    use chrono::{TimeZone, Utc};
    use frameloom_domain::{
        Appearance, AssetId, AssetKind, ProjectId, Scene, SceneAsset, Shot, TransformationEvent,
        TransformationKind,
    };

    struct Fixture {
        scene: Scene,
        shots: Vec<Shot>,
        assets: Vec<SceneAsset>,
        events: Vec<TransformationEvent>,
    }

    impl Fixture {
        fn new() -> Self {
            let scene = Scene::new(ProjectId::new(), "The Banquet", 0)
                .with_visual_style("candlelit interiors, 35mm film grain");
            let shots = vec![
                Shot::new(scene.id(), "SH010", 0).with_action("Margaux raises her glass."),
                Shot::new(scene.id(), "SH020", 1).with_action("She drinks."),
                Shot::new(scene.id(), "SH030", 2).with_action("The hall falls silent."),
            ];
            let assets = vec![SceneAsset::new(
                scene.id(),
                AssetId::new(),
                "Margaux",
                AssetKind::Character,
                Appearance::new("a poised noblewoman in a courtly gown")
                    .with_image("gallery/margaux_gown.png"),
            )];
            Self {
                scene,
                shots,
                assets,
                events: Vec::new(),
            }
        }

        fn with_event(mut self, event: TransformationEvent) -> Self {
            self.events.push(event);
            self
        }

        fn use_case(&self) -> BuildShotPrompt {
            let mut scene_repo = MockSceneRepo::new();
            let scene = self.scene.clone();
            scene_repo
                .expect_get()
                .returning(move |_| Ok(Some(scene.clone())));

            let mut shot_repo = MockShotRepo::new();
            let shots = self.shots.clone();
            shot_repo
                .expect_list_for_scene()
                .returning(move |_| Ok(shots.clone()));

            let mut asset_repo = MockSceneAssetRepo::new();
            let assets = self.assets.clone();
            asset_repo
                .expect_list_for_scene()
                .returning(move |_| Ok(assets.clone()));

            let mut event_repo = MockTransformationEventRepo::new();
            let events = self.events.clone();
            event_repo
                .expect_list_for_scene()
                .returning(move |_| Ok(events.clone()));

            let mut clock = MockClockPort::new();
            clock.expect_now().returning(|| {
                Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
                    .single()
                    .expect("valid timestamp")
            });

            BuildShotPrompt::new(
                Arc::new(scene_repo),
                Arc::new(shot_repo),
                Arc::new(asset_repo),
                Arc::new(event_repo),
                Arc::new(clock),
            )
        }
    }

    fn poisoning_event(fixture: &Fixture) -> TransformationEvent {
        let mut event = TransformationEvent::new(
            fixture.assets[0].instance_id(),
            fixture.shots[1].id(),
            TransformationKind::WithinShot,
            Appearance::new("a poised noblewoman in a courtly gown"),
            Appearance::new("ashen-faced, clutching her throat")
                .with_image("gallery/margaux_poisoned.png"),
            Utc::now(),
        )
        .with_narrative("The poison takes hold; color drains from her face");
        event.confirm();
        event
    }

    #[tokio::test]
    async fn test_baseline_prompt_without_events() {
        let fixture = Fixture::new();
        let output = fixture
            .use_case()
            .execute(fixture.scene.id(), fixture.shots[0].id())
            .await
            .expect("prompt builds");

        assert!(output
            .generation
            .prompt
            .contains("a poised noblewoman in a courtly gown"));
        assert!(output.generation.prompt.contains("The Banquet"));
        assert!(output
            .generation
            .prompt
            .contains("candlelit interiors, 35mm film grain"));
        assert_eq!(
            output.generation.reference_images,
            vec!["gallery/margaux_gown.png".to_string()]
        );
        assert!(!output.context.assets[0].is_transforming);
    }

    #[tokio::test]
    async fn test_override_replaces_baseline_description() {
        let fixture = Fixture::new();
        let event = poisoning_event(&fixture);
        let fixture = fixture.with_event(event);

        // Past the trigger shot: the committed post state is what prompts see.
        let output = fixture
            .use_case()
            .execute(fixture.scene.id(), fixture.shots[2].id())
            .await
            .expect("prompt builds");

        assert!(output
            .generation
            .prompt
            .contains("ashen-faced, clutching her throat"));
        assert!(!output.generation.prompt.contains("poised noblewoman"));
        assert_eq!(
            output.generation.reference_images,
            vec!["gallery/margaux_poisoned.png".to_string()]
        );
    }

    #[tokio::test]
    async fn test_transforming_shot_keeps_pre_state_and_injects_narration() {
        let fixture = Fixture::new();
        let event = poisoning_event(&fixture);
        let fixture = fixture.with_event(event);

        let output = fixture
            .use_case()
            .execute(fixture.scene.id(), fixture.shots[1].id())
            .await
            .expect("prompt builds");

        // Still the pre-transformation appearance...
        assert!(output
            .generation
            .prompt
            .contains("a poised noblewoman in a courtly gown"));
        // ...with the transformation happening on screen.
        assert!(output
            .generation
            .prompt
            .contains("The poison takes hold; color drains from her face"));
        assert!(output
            .generation
            .prompt
            .contains("ashen-faced, clutching her throat"));

        // Both the current and the staged reference image travel along.
        assert_eq!(
            output.generation.reference_images,
            vec![
                "gallery/margaux_gown.png".to_string(),
                "gallery/margaux_poisoned.png".to_string(),
            ]
        );

        let asset = &output.context.assets[0];
        assert!(asset.is_transforming);
        assert_eq!(
            asset.upcoming_description.as_deref(),
            Some("ashen-faced, clutching her throat")
        );
    }

    #[tokio::test]
    async fn test_narration_request_serializes_context() {
        let fixture = Fixture::new();
        let use_case = fixture.use_case();
        let output = use_case
            .execute(fixture.scene.id(), fixture.shots[0].id())
            .await
            .expect("prompt builds");

        let request = use_case
            .narration_request(&output.context)
            .expect("context serializes");
        assert!(request
            .system_prompt
            .as_deref()
            .unwrap_or_default()
            .contains("film pre-production assistant"));
        assert_eq!(request.messages.len(), 1);
        assert!(request.messages[0].content.contains("\"displayCode\": \"SH010\""));
    }

    #[tokio::test]
    async fn test_unknown_shot_is_rejected() {
        let fixture = Fixture::new();
        let err = fixture
            .use_case()
            .execute(fixture.scene.id(), ShotId::new())
            .await
            .expect_err("unknown shot");
        assert!(err.is_not_found());
    }
}
