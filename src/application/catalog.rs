//! Standard command catalog for scene graphs.

use tracing::warn;

use crate::application::args::{self, node};
use crate::config::Settings;
use crate::domain::{
    Axis, BodyType, Command, CommandResult, CommandTreeBuilder, ConsoleError, ForceMode,
    Geometry, LightKind, SceneGraph,
};

type ActionResult = Result<CommandResult, ConsoleError>;

/// Builder preloaded with the standard scene commands, `help` registered last.
pub fn standard_commands<S: SceneGraph + 'static>(settings: &Settings) -> CommandTreeBuilder<S> {
    let step = settings.camera_step_degrees.to_radians();

    let builder = CommandTreeBuilder::new()
        .add_command(Command::group(
            "spawn",
            vec![
                Command::new("box", 5, spawn_box::<S>),
                Command::new("sphere", 2, spawn_sphere::<S>),
            ],
        ))
        .add_command(Command::new("remove", 1, remove::<S>))
        .add_command(Command::new("position", 1, position::<S>))
        .add_command(Command::new("set", 4, set_position::<S>))
        .add_command(Command::new("move", 4, move_by::<S>))
        .add_command(Command::new("color", 4, color::<S>))
        .add_command(
            Command::new("light", 2, light::<S>)
                .with_children(vec![Command::new("clear", 1, clear_light::<S>)]),
        )
        .add_command(
            Command::new("physics", 2, physics::<S>)
                .with_children(vec![Command::new("clear", 1, clear_physics::<S>)]),
        )
        .add_command(Command::new("force", 5, force::<S>))
        .add_command(Command::new("torque", 5, torque::<S>))
        .add_command(Command::new("gravity", 3, gravity::<S>))
        .add_command(Command::group(
            "camera",
            vec![
                Command::new("free", 1, camera_free::<S>),
                Command::new("rotate", 1, move |scene: &mut S, args: &[&str]| {
                    camera_rotate(scene, args, step)
                }),
            ],
        ))
        .add_command(Command::new("list", 0, list::<S>));

    let help = format!("{}help (0)", builder.render());
    builder.add_command(Command::new("help", 0, move |_: &mut S, _: &[&str]| {
        CommandResult::output(help.clone())
    }))
}

fn spawn_box<S: SceneGraph>(scene: &mut S, args: &[&str]) -> ActionResult {
    let [width, height, length, chamfer, name] = args else {
        return Err(ConsoleError::InvalidArguments);
    };
    let geometry = Geometry::Box {
        width: args::positive(width)?,
        height: args::positive(height)?,
        length: args::positive(length)?,
        chamfer: args::non_negative(chamfer)?,
    };
    scene
        .spawn(name, geometry)
        .ok_or(ConsoleError::UninitializedScene)?;
    Ok(CommandResult::Ok)
}

fn spawn_sphere<S: SceneGraph>(scene: &mut S, args: &[&str]) -> ActionResult {
    let [radius, name] = args else {
        return Err(ConsoleError::InvalidArguments);
    };
    let geometry = Geometry::Sphere {
        radius: args::positive(radius)?,
    };
    scene
        .spawn(name, geometry)
        .ok_or(ConsoleError::UninitializedScene)?;
    Ok(CommandResult::Ok)
}

fn remove<S: SceneGraph>(scene: &mut S, args: &[&str]) -> ActionResult {
    let [name] = args else {
        return Err(ConsoleError::InvalidArguments);
    };
    let id = node(scene, name)?;
    scene.remove(id);
    Ok(CommandResult::Ok)
}

fn position<S: SceneGraph>(scene: &mut S, args: &[&str]) -> ActionResult {
    let [name] = args else {
        return Err(ConsoleError::InvalidArguments);
    };
    let id = node(scene, name)?;
    let pos = scene.position(id).ok_or(ConsoleError::TargetNotFound)?;
    Ok(CommandResult::output(format!("{}: {}", name, pos)))
}

fn set_position<S: SceneGraph>(scene: &mut S, args: &[&str]) -> ActionResult {
    let [name, coords @ ..] = args else {
        return Err(ConsoleError::InvalidArguments);
    };
    let id = node(scene, name)?;
    scene.set_position(id, args::vec3(coords)?);
    Ok(CommandResult::Ok)
}

fn move_by<S: SceneGraph>(scene: &mut S, args: &[&str]) -> ActionResult {
    let [name, delta @ ..] = args else {
        return Err(ConsoleError::InvalidArguments);
    };
    let id = node(scene, name)?;
    scene.translate(id, args::vec3(delta)?);
    Ok(CommandResult::Ok)
}

fn color<S: SceneGraph>(scene: &mut S, args: &[&str]) -> ActionResult {
    let [name, rgb @ ..] = args else {
        return Err(ConsoleError::InvalidArguments);
    };
    let id = node(scene, name)?;
    scene.set_color(id, args::color(rgb)?);
    Ok(CommandResult::Ok)
}

fn light<S: SceneGraph>(scene: &mut S, args: &[&str]) -> ActionResult {
    let [name, kind] = args else {
        return Err(ConsoleError::InvalidArguments);
    };
    let id = node(scene, name)?;
    scene.set_light(id, Some(args::keyword::<LightKind>(kind)?));
    Ok(CommandResult::Ok)
}

fn clear_light<S: SceneGraph>(scene: &mut S, args: &[&str]) -> ActionResult {
    let [name] = args else {
        return Err(ConsoleError::InvalidArguments);
    };
    let id = node(scene, name)?;
    scene.set_light(id, None);
    Ok(CommandResult::Ok)
}

fn physics<S: SceneGraph>(scene: &mut S, args: &[&str]) -> ActionResult {
    let [name, kind] = args else {
        return Err(ConsoleError::InvalidArguments);
    };
    let id = node(scene, name)?;
    scene.set_physics_body(id, Some(args::keyword::<BodyType>(kind)?));
    Ok(CommandResult::Ok)
}

fn clear_physics<S: SceneGraph>(scene: &mut S, args: &[&str]) -> ActionResult {
    let [name] = args else {
        return Err(ConsoleError::InvalidArguments);
    };
    let id = node(scene, name)?;
    scene.set_physics_body(id, None);
    Ok(CommandResult::Ok)
}

fn force<S: SceneGraph>(scene: &mut S, args: &[&str]) -> ActionResult {
    let [name, x, y, z, mode] = args else {
        return Err(ConsoleError::InvalidArguments);
    };
    let id = node(scene, name)?;
    let force = args::vec3(&[*x, *y, *z])?;
    if !scene.apply_force(id, force, args::keyword::<ForceMode>(mode)?) {
        warn!(node = *name, "force ignored, node has no physics body");
    }
    Ok(CommandResult::Ok)
}

fn torque<S: SceneGraph>(scene: &mut S, args: &[&str]) -> ActionResult {
    let [name, x, y, z, mode] = args else {
        return Err(ConsoleError::InvalidArguments);
    };
    let id = node(scene, name)?;
    let torque = args::vec3(&[*x, *y, *z])?;
    if !scene.apply_torque(id, torque, args::keyword::<ForceMode>(mode)?) {
        warn!(node = *name, "torque ignored, node has no physics body");
    }
    Ok(CommandResult::Ok)
}

fn gravity<S: SceneGraph>(scene: &mut S, args: &[&str]) -> ActionResult {
    scene.set_gravity(args::vec3(args)?);
    Ok(CommandResult::Ok)
}

fn camera_free<S: SceneGraph>(scene: &mut S, args: &[&str]) -> ActionResult {
    let [state] = args else {
        return Err(ConsoleError::InvalidArguments);
    };
    scene.set_camera_control(args::switch(state)?);
    Ok(CommandResult::Ok)
}

fn camera_rotate<S: SceneGraph>(scene: &mut S, args: &[&str], radians: f32) -> ActionResult {
    let [axis] = args else {
        return Err(ConsoleError::InvalidArguments);
    };
    scene.rotate_camera(args::keyword::<Axis>(axis)?, radians);
    Ok(CommandResult::Ok)
}

fn list<S: SceneGraph>(scene: &mut S, _args: &[&str]) -> ActionResult {
    Ok(CommandResult::output(scene.node_names().join("\n")))
}
