use std::collections::BTreeSet;
use std::sync::Mutex;

use haven_core::{StepRenderer, StepStatus};
use log::debug;
use serde::Serialize;

/// Un "fotograma" del indicador de progreso.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressFrame {
    pub current_step: usize,
    pub steps: Vec<StepStatus>,
}

/// Indicador de progreso: el paso actual queda activo y todos los anteriores
/// se marcan completados, igual que la barra del formulario web. Los pasos
/// posteriores ya completados (tras volver atrás) también se marcan.
#[derive(Debug)]
pub struct ProgressRenderer {
    step_count: usize,
    frames: Mutex<Vec<ProgressFrame>>,
}

impl ProgressRenderer {
    pub fn new(step_count: usize) -> Self {
        Self { step_count,
               frames: Mutex::new(Vec::new()) }
    }

    pub fn frame(&self, current_step: usize, completed_steps: &BTreeSet<usize>) -> ProgressFrame {
        let steps = (1..=self.step_count).map(|n| {
                                             if n == current_step {
                                                 StepStatus::Active
                                             } else if n < current_step || completed_steps.contains(&n) {
                                                 StepStatus::Completed
                                             } else {
                                                 StepStatus::Pending
                                             }
                                         })
                                         .collect();
        ProgressFrame { current_step, steps }
    }

    pub fn frames(&self) -> Vec<ProgressFrame> {
        self.frames.lock().map(|f| f.clone()).unwrap_or_default()
    }

    pub fn last_frame(&self) -> Option<ProgressFrame> {
        self.frames().pop()
    }
}

impl StepRenderer for ProgressRenderer {
    fn render(&self, current_step: usize, completed_steps: &BTreeSet<usize>) {
        let frame = self.frame(current_step, completed_steps);
        if let Ok(json) = serde_json::to_string(&frame) {
            debug!("[render] {json}");
        }
        if let Ok(mut frames) = self.frames.lock() {
            frames.push(frame);
        }
    }
}
