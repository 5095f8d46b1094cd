mod camera;
mod config;
mod interval;
mod material;
mod primitives;
mod ray;
mod scene;

use crate::{
    camera::Camera, config::RenderConfig, interval::Interval, material::*, primitives::*,
    ray::Ray, scene::Scene,
};
use anyhow::Context;
use glam::{vec3, Vec3};
use rand::prelude::*;
use rayon::prelude::*;
use std::{
    path::Path,
    sync::atomic::{AtomicU64, Ordering},
    sync::Arc,
};

const COLOR_CHANNELS: u32 = 3;

type DefaultRng = rand_xoshiro::Xoshiro256Plus;

// Computes the color of a pixel/sample based on a ray
fn color(ray: Ray, bounces: &mut u32, scene: &Scene, max_bounces: u32, rng: &mut DefaultRng) -> Vec3 {
    // Max bounces
    if *bounces > max_bounces {
        Vec3::zero()
    }
    // If the ray trace hits something
    else if let Some(hit) = scene.intersection(ray, Interval::new(0.001, f32::INFINITY)) {
        // The material of the object we hit decides how the ray scatters
        if let Some(scatter) = hit.material.scatter(ray, &hit, rng) {
            *bounces += 1;
            scatter.attenuation * color(scatter.scattered, bounces, scene, max_bounces, rng)
        } else {
            // Absorbed
            Vec3::zero()
        }
    // Else draw the background/skybox
    } else {
        let dir = ray.direction.normalize();
        let t = 0.5 * (dir.y() + 1.0);
        (1.0 - t) * vec3(1.0, 1.0, 1.0) + t * vec3(0.5, 0.7, 1.0)
    }
}

// A couple of cubes on a cube the size of a small planet, plus two spheres
fn build_scene() -> Scene {
    let mut scene = Scene::new();

    let ground = Arc::new(Lambertian::new(vec3(0.5, 0.5, 0.5)));
    scene.add(Cube::new(vec3(0.0, -100.5, -1.0), 200.0, ground));

    let purple = Arc::new(Lambertian::new(vec3(0.6, 0.2, 0.9)));
    scene.add(Cube::rotated(vec3(0.0, 0.0, -1.0), 1.0, 45.0, purple));

    let green = Arc::new(Lambertian::new(vec3(0.2, 0.7, 0.3)));
    scene.add(Cube::new(vec3(0.9, -0.3, -0.2), 0.4, green));

    let metal = Arc::new(Metal::new(vec3(0.7, 0.6, 0.5), 0.05));
    scene.add(Sphere::new(vec3(1.6, 0.0, -1.6), 0.5, metal));

    let glass = Arc::new(Dielectric::new(1.5));
    scene.add(Sphere::new(vec3(-1.4, 0.0, -0.6), 0.5, glass));

    scene
}

fn render(config: &RenderConfig, camera: &Camera, scene: &Scene) -> Vec<u8> {
    let mut buffer = vec![0u8; (config.width * config.height * COLOR_CHANNELS) as usize];

    let global_ray_count = AtomicU64::new(0);
    let start = std::time::Instant::now();

    buffer
        .par_chunks_mut((config.width * COLOR_CHANNELS) as usize)
        .rev()
        .enumerate()
        .for_each(|(y, row)| {
            let mut rng = DefaultRng::from_entropy();
            row.chunks_mut(COLOR_CHANNELS as usize)
                .enumerate()
                .for_each(|(i, pixel)| {
                    let mut out = Vec3::zero();
                    let mut ray_count = 0;

                    // Antialiasing via multisampling
                    for _ in 0..config.samples {
                        let u = (rng.gen::<f32>() + i as f32) / config.width as f32;
                        let v = (rng.gen::<f32>() + y as f32) / config.height as f32;

                        let ray = camera.ray(u, v, &mut rng);

                        let mut bounces = 1;
                        out += color(ray, &mut bounces, scene, config.max_bounces, &mut rng);
                        ray_count += u64::from(bounces);
                    }

                    out /= config.samples as f32;

                    // Gamma correct
                    out = Vec3::new(
                        out.x().powf(1.0 / config.gamma),
                        out.y().powf(1.0 / config.gamma),
                        out.z().powf(1.0 / config.gamma),
                    );

                    // Convert from [0, 1] to [0, 256]
                    pixel[0] = (255.99 * out.x()) as u8;
                    pixel[1] = (255.99 * out.y()) as u8;
                    pixel[2] = (255.99 * out.z()) as u8;

                    global_ray_count.fetch_add(ray_count, Ordering::Relaxed);
                })
        });

    let duration = start.elapsed();
    let global_ray_count = global_ray_count.load(Ordering::Relaxed) as f64 / 1_000_000.0;
    let rays_per_second = global_ray_count / duration.as_secs_f64();
    println!(
        "Time elapsed: {:.2?}\nTotal Rays: {:.2}M\nRays per second: {:.2}M",
        duration, global_ray_count, rays_per_second
    );

    buffer
}

fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => RenderConfig::load(Path::new(&path))?,
        None => RenderConfig::default(),
    };

    let eye = vec3(3.0, 1.5, 2.5);
    let target = vec3(0.0, 0.0, -1.0);
    let up = vec3(0.0, 1.0, 0.0);
    let aspect = config.width as f32 / config.height as f32;
    let camera = Camera::new(eye, target, up, 30.0, aspect, 0.05);

    let scene = build_scene();
    let buffer = render(&config, &camera, &scene);

    image::save_buffer(
        &config.output,
        &buffer,
        config.width,
        config.height,
        image::ColorType::Rgb8,
    )
    .with_context(|| format!("Failed to write image: {}", config.output.display()))?;

    Ok(())
}
