//! Headless demo: drives a slide panel through a full open / interrupt /
//! close cycle on the simulated host and prints the lifecycle events.

use anyhow::Result;
use slidedown::{
    ElementKind, SimHost, SlideConfig, SlideDown, SlideHost, SlideProps,
};

fn pump(host: &mut SimHost, slide: &mut SlideDown, ms: u64) {
    for _ in 0..ms {
        for event in host.advance(1.0) {
            slide.handle_host_event(host, event);
        }
    }
}

fn report(label: &str, host: &SimHost, slide: &mut SlideDown) {
    println!(
        "[{:>6.1}ms] {}: {:?} at {:.2}px",
        host.clock_ms(),
        label,
        slide.phase(),
        slide.rendered(host),
    );
    for event in slide.drain_events() {
        println!("           event: {:?}", event);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = SlideConfig::load();
    log::info!(
        "duration: {}ms, transition on appear: {}",
        config.transition.duration_ms,
        config.appear.transition_on_appear,
    );

    let mut host = SimHost::with_config(&config);
    host.set_default_natural_height(18.0);

    let children = vec![host.create_node(&ElementKind::default())];
    let props = SlideProps::from_config(&config)
        .class_name("demo")
        .children(children.clone());

    let mut slide = SlideDown::mount(&mut host, props.clone());
    report("mounted", &host, &mut slide);

    pump(&mut host, &mut slide, 60);
    report("mid-open", &host, &mut slide);

    // Reverse mid-flight
    slide.update(&mut host, props.clone().closed(true));
    report("reversed", &host, &mut slide);

    pump(&mut host, &mut slide, 150);
    report("closed", &host, &mut slide);

    // Open again and let it settle
    slide.update(&mut host, props);
    pump(&mut host, &mut slide, 150);
    report("reopened", &host, &mut slide);

    slide.unmount(&mut host);
    println!("[{:>6.1}ms] unmounted", host.clock_ms());

    Ok(())
}
