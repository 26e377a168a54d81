use crate::gesture_classifier::preprocess::{NormalizedTensor, INPUT_CHANNELS};
use crate::library::logger::interface::Logger;
use crate::model_provider::interface::ModelProvider;
use crate::model_provider::model_config::ModelConfig;
use std::sync::Arc;
use tract_onnx::prelude::*;

pub struct ModelProviderTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    config: ModelConfig,
}

impl ModelProviderTractOnnx {
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let logger = logger.with_namespace("model_provider");
        logger.info(&format!(
            "Loading model from {}",
            config.onnx_model_path.display()
        ))?;

        if !config.onnx_model_path.exists() {
            return Err(format!(
                "model file not found: {}",
                config.onnx_model_path.display()
            )
            .into());
        }

        let (height, width) = config.input_shape;
        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(
                    f32::datum_type(),
                    tvec!(1, height as usize, width as usize, INPUT_CHANNELS),
                ),
            )?
            .into_optimized()?
            .into_runnable()?;

        logger.info("Model loaded")?;

        Ok(Self { model, config })
    }
}

impl ModelProvider for ModelProviderTractOnnx {
    fn predict(
        &self,
        input: &NormalizedTensor,
    ) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        let (height, width) = self.config.input_shape;
        let expected = [1, height as usize, width as usize, INPUT_CHANNELS];
        if input.shape() != expected {
            return Err(format!(
                "input shape {:?} does not match model input {:?}",
                input.shape(),
                expected
            )
            .into());
        }

        let outputs = self.model.run(tvec!(input.to_tensor().into_tvalue()))?;
        let output = outputs
            .first()
            .ok_or("model produced no outputs")?
            .to_array_view::<f32>()?;

        Ok(output.iter().copied().collect())
    }
}
