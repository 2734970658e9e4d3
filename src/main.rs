use log::info;

use sphere_collision::{
    config::Config, error::Error, graphics::Renderer, input::UserInput, scene::Scene,
    ui::DragPanel,
};

fn main() -> Result<(), Error> {
    env_logger::init();

    // Create renderer
    let config = Config::default();
    let mut renderer = Renderer::new(&config.window)?;

    let mut input = UserInput::new();
    let mut panel = DragPanel::new();
    let mut scene = Scene::new(config);

    // Main loop
    while renderer.process_events(&mut input) {
        renderer.begin_frame();
        panel.begin_frame(&input);
        let flow = scene.frame(&input, &mut panel, &mut renderer);
        renderer.set_caption(&panel.caption());
        renderer.end_frame();

        if flow.is_break() {
            info!("escape pressed, exiting");
            break;
        }
    }

    Ok(())
}
