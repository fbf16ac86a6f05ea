//! Export handlers - run board exports on the background executor.

use super::KwlBoard;
use crate::export::{BoardRasterizer, ExportJob, today_stamp};
use gpui::*;

impl KwlBoard {
    /// Export the visible board into the export directory.
    pub fn download_board(&mut self, cx: &mut Context<Self>) {
        let dir = self.settings.resolved_export_dir();
        match self.board.begin_export(today_stamp(), &dir) {
            Some(job) => self.run_export(job, cx),
            None => self.after_change(cx),
        }
    }

    /// Board-full modal action: export, then clear the full partition.
    pub fn download_and_clear(&mut self, cx: &mut Context<Self>) {
        let dir = self.settings.resolved_export_dir();
        match self.board.begin_export_and_clear(today_stamp(), &dir) {
            Some(job) => self.run_export(job, cx),
            None => self.after_change(cx),
        }
    }

    fn run_export(&mut self, job: ExportJob, cx: &mut Context<Self>) {
        tracing::info!("Exporting board as {}", job.file_name());
        // Re-render first so the live board shows the stamp while capturing
        cx.notify();

        let fonts = self.settings.export_fonts.clone();
        let task = cx.background_spawn(async move {
            BoardRasterizer::with_fallbacks(&fonts).and_then(|rasterizer| job.run(&rasterizer))
        });
        cx.spawn(async move |this, cx| {
            let result = task.await;
            this.update(cx, |this, cx| {
                this.board.finish_export(result);
                this.after_change(cx);
            })
            .ok();
        })
        .detach();
    }
}
