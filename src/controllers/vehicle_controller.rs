//! Controller de vehículos del admin
//!
//! CRUD del inventario más la gestión de imágenes inline, con el límite
//! de 20 imágenes por vehículo aplicado en tiempo de validación.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::controllers::catalog_controller::CatalogController;
use crate::dto::catalog_dto::ListingQuery;
use crate::dto::vehicle_dto::{
    CreateVehicleImageRequest, CreateVehicleRequest, UpdateVehicleImageRequest,
    UpdateVehicleRequest, VehicleDetailResponse, VehicleResponse,
};
use crate::dto::ApiResponse;
use crate::models::vehicle_image::VehicleImage;
use crate::repositories::vehicle_image_repository::VehicleImageRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::{validate_image_count, validate_non_negative, MAX_VEHICLE_IMAGES};

pub struct VehicleController {
    repository: VehicleRepository,
    images: VehicleImageRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            images: VehicleImageRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        if let Some(price) = request.price {
            validate_non_negative(price)
                .map_err(|_| validation_error("price", "El precio no puede ser negativo"))?;
        }

        // Verificar que el VIN no exista
        if let Some(vin) = &request.vin {
            if self.repository.vin_exists(vin, None).await? {
                return Err(AppError::Conflict("El VIN ya está registrado".to_string()));
            }
        }

        let vehicle = self.repository.create(&request).await?;

        if let Some(features) = &request.features {
            self.repository.set_features(vehicle.id, features).await?;
        }

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleDetailResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let features = self.repository.features_for(id).await?;
        let images = self.images.list_by_vehicle(id).await?;

        Ok(VehicleDetailResponse {
            vehicle: vehicle.into(),
            features,
            images,
        })
    }

    pub async fn list(&self, query: &ListingQuery) -> Result<Vec<VehicleResponse>, AppError> {
        let filters = CatalogController::parse_filters(query);
        let vehicles = self.repository.find_filtered(&filters).await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        if let Some(price) = request.price {
            validate_non_negative(price)
                .map_err(|_| validation_error("price", "El precio no puede ser negativo"))?;
        }

        if let Some(vin) = &request.vin {
            if self.repository.vin_exists(vin, Some(id)).await? {
                return Err(AppError::Conflict("El VIN ya está registrado".to_string()));
            }
        }

        let vehicle = self.repository.update(id, &request).await?;

        if let Some(features) = &request.features {
            self.repository.set_features(id, features).await?;
        }

        // Validación completa del vehículo tras el guardado
        self.validate_vehicle(id).await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Validar el vehículo: no puede tener más de 20 imágenes asociadas.
    /// El conteo es en memoria al momento de validar, no hay constraint
    /// en la base de datos.
    pub async fn validate_vehicle(&self, id: Uuid) -> Result<(), AppError> {
        let count = self.images.count_for_vehicle(id).await?;
        validate_image_count(count)
            .map_err(|_| validation_error("images", "A vehicle cannot have more than 20 images."))?;
        Ok(())
    }

    // --- Imágenes inline ---

    pub async fn list_images(&self, vehicle_id: Uuid) -> Result<Vec<VehicleImage>, AppError> {
        self.repository
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        self.images.list_by_vehicle(vehicle_id).await
    }

    pub async fn add_image(
        &self,
        vehicle_id: Uuid,
        request: CreateVehicleImageRequest,
    ) -> Result<ApiResponse<VehicleImage>, AppError> {
        request.validate()?;

        self.repository
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        // Límite de imágenes, verificado antes de insertar
        let count = self.images.count_for_vehicle(vehicle_id).await?;
        if count >= MAX_VEHICLE_IMAGES {
            return Err(validation_error(
                "images",
                "A vehicle cannot have more than 20 images.",
            ));
        }

        let image = self.images.create(vehicle_id, &request).await?;

        Ok(ApiResponse::success_with_message(
            image,
            "Imagen agregada exitosamente".to_string(),
        ))
    }

    pub async fn update_image(
        &self,
        image_id: Uuid,
        request: UpdateVehicleImageRequest,
    ) -> Result<VehicleImage, AppError> {
        request.validate()?;
        self.images.update(image_id, &request).await
    }

    pub async fn delete_image(&self, image_id: Uuid) -> Result<(), AppError> {
        self.images.delete(image_id).await
    }
}
