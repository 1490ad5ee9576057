use bevy::prelude::*;
use perceptron_forager::config::*;
use perceptron_forager::view::tile_center;
use perceptron_forager::{Agent, Cell, Facing, WorldGrid};

/// Marker for the quad drawn over one stored grid cell
#[derive(Component)]
pub struct CellSprite;

/// Marker for the agent's triangle
#[derive(Component)]
pub struct AgentGlyph;

/// Shared mesh and materials so redraws don't allocate new assets
#[derive(Resource)]
pub struct CellPalette {
    pub quad: Handle<Mesh>,
    pub food: Handle<ColorMaterial>,
    pub hazard: Handle<ColorMaterial>,
    pub water: Handle<ColorMaterial>,
    pub snow: Handle<ColorMaterial>,
    pub grass: Handle<ColorMaterial>,
}

impl CellPalette {
    /// Colour priority: food, hazard, water, snow, grass
    pub fn material_for(&self, cell: Cell) -> Handle<ColorMaterial> {
        if cell.contains(Cell::FOOD) {
            self.food.clone()
        } else if cell.contains(Cell::HAZARD) {
            self.hazard.clone()
        } else if cell.contains(Cell::WATER) {
            self.water.clone()
        } else if cell.contains(Cell::SNOW) {
            self.snow.clone()
        } else {
            self.grass.clone()
        }
    }
}

fn hex_color(rgb: u32) -> Color {
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

fn facing_rotation(facing: Facing) -> Quat {
    let angle = match facing {
        Facing::North => 0.0,
        Facing::West => std::f32::consts::FRAC_PI_2,
        Facing::South => std::f32::consts::PI,
        Facing::East => -std::f32::consts::FRAC_PI_2,
    };
    Quat::from_rotation_z(angle)
}

/// System to build the palette, the grass backdrop and the agent glyph
pub fn setup_grid_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let palette = CellPalette {
        quad: meshes.add(Rectangle::new(CELL_SIZE, CELL_SIZE)),
        food: materials.add(ColorMaterial::from_color(hex_color(FOOD_COLOR))),
        hazard: materials.add(ColorMaterial::from_color(hex_color(HAZARD_COLOR))),
        water: materials.add(ColorMaterial::from_color(hex_color(WATER_COLOR))),
        snow: materials.add(ColorMaterial::from_color(hex_color(SNOW_COLOR))),
        grass: materials.add(ColorMaterial::from_color(hex_color(GRASS_COLOR))),
    };

    commands.spawn((
        Mesh2d(meshes.add(Rectangle::new(
            WORLD_WIDTH as f32 * CELL_SIZE,
            WORLD_HEIGHT as f32 * CELL_SIZE,
        ))),
        MeshMaterial2d(palette.grass.clone()),
        Transform::from_xyz(0.0, 0.0, -1.0),
    ));

    let half = CELL_SIZE * 0.5;
    commands.spawn((
        AgentGlyph,
        Mesh2d(meshes.add(Triangle2d::new(
            Vec2::new(0.0, half * 1.5),
            Vec2::new(-half, -half),
            Vec2::new(half, -half),
        ))),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(Color::WHITE))),
        Transform::from_xyz(0.0, 0.0, 1.0),
    ));

    commands.insert_resource(palette);
}

/// System to redraw the stored cells whenever the world changed
pub fn sync_cells(
    mut commands: Commands,
    world: Res<WorldGrid>,
    palette: Option<Res<CellPalette>>,
    sprites: Query<Entity, With<CellSprite>>,
) {
    let Some(palette) = palette else {
        return;
    };
    if !world.is_changed() {
        return;
    }

    for entity in sprites.iter() {
        commands.entity(entity).despawn();
    }

    for ((x, y), cell) in world.stored() {
        let center = tile_center(x, y);
        commands.spawn((
            CellSprite,
            Mesh2d(palette.quad.clone()),
            MeshMaterial2d(palette.material_for(cell)),
            Transform::from_xyz(center.x, center.y, 0.0),
        ));
    }
}

/// System to move and turn the agent glyph
pub fn sync_agent_glyph(agent: Res<Agent>, mut glyphs: Query<&mut Transform, With<AgentGlyph>>) {
    let center = tile_center(agent.x, agent.y);
    for mut transform in glyphs.iter_mut() {
        transform.translation.x = center.x;
        transform.translation.y = center.y;
        transform.rotation = facing_rotation(agent.facing);
    }
}
