use std::sync::Arc;

use crate::pipeline::Pipeline;

#[derive(Debug, Clone)]
pub struct GatewayState {
    pub pipeline: Arc<Pipeline>,
}

impl GatewayState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}
